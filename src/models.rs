//! Frontend Models
//!
//! Data structures matching the backend's JSON. Rust field names are
//! snake_case; the wire names are kept with `serde(rename)`.

use serde::{Deserialize, Deserializer, Serialize};

/// A forum thread ("hilo" / "publicación")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u32,
    #[serde(rename = "userid", default)]
    pub user_id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "imageUri", default)]
    pub image_uri: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "authorname", default, deserialize_with = "null_as_default")]
    pub author_name: String,
    #[serde(rename = "createDt", default)]
    pub created_at: String,
    #[serde(default)]
    pub likes: u32,
}

/// A comment attached to a post.
///
/// The per-post listing uses camelCase names, the bulk admin listing
/// snake_case ones; both decode into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u32,
    #[serde(rename = "publicationId", alias = "publicacion_id", default)]
    pub post_id: u32,
    #[serde(rename = "usuarioId", alias = "usuario_id", default)]
    pub user_id: u32,
    #[serde(rename = "contenido")]
    pub content: String,
    #[serde(rename = "autorNombre", alias = "autor_nombre", default)]
    pub author_name: String,
    #[serde(rename = "fechaCreacion", alias = "fecha_creacion", default)]
    pub created_at: String,
}

impl Comment {
    /// Author label, falling back to the numeric id when the name is missing
    pub fn display_author(&self) -> String {
        if self.author_name.trim().is_empty() {
            format!("Usuario {}", self.user_id)
        } else {
            self.author_name.clone()
        }
    }
}

/// Body of `POST /api/publicaciones/publicar`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub userid: u32,
    pub category: String,
    #[serde(rename = "imageUri")]
    pub image_uri: Option<String>,
    pub title: String,
    pub description: String,
    pub authorname: String,
    pub status: &'static str,
}

/// Body of `POST /api/comentarios/comentar`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    #[serde(rename = "publicationId")]
    pub publication_id: u32,
    #[serde(rename = "usuarioId")]
    pub usuario_id: u32,
    pub contenido: String,
    #[serde(rename = "autorNombre")]
    pub autor_nombre: String,
}

/// User profile as returned by `GET /api/v1/users/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub nombre_usuario: String,
    #[serde(default)]
    pub correo: String,
}

/// Body of `PUT /api/v1/users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub nombre_usuario: String,
    pub correo: String,
}

/// Body of `POST /api/v1/auth/login`
#[derive(Serialize)]
pub struct LoginArgs<'a> {
    #[serde(rename = "nombreUsuario")]
    pub nombre_usuario: &'a str,
    pub contrasena: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub usuario_id: String,
    pub nombre_usuario: String,
    #[serde(deserialize_with = "string_or_number")]
    pub rol_id: String,
}

/// One bad row must not sink a whole listing: `null` reads as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `1` as well as `"1"`; ids end up in string storage anyway.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}

/// Backend error body (`{"message": "..."}`)
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_wire_names() {
        let json = r#"{
            "id": 10, "userid": 3, "category": "Shooter", "imageUri": null,
            "title": "Un Hilo", "description": "texto", "authorname": "Autor",
            "createDt": "2025-01-02T00:00:00", "likes": 7
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 10);
        assert_eq!(post.user_id, 3);
        assert_eq!(post.author_name, "Autor");
        assert_eq!(post.created_at, "2025-01-02T00:00:00");
        assert_eq!(post.likes, 7);
        assert!(post.image_uri.is_none());
    }

    #[test]
    fn test_post_tolerates_missing_optional_fields() {
        let json = r#"{"id": 1, "category": "Retro", "title": "t"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.created_at, "");
    }

    #[test]
    fn test_listing_survives_null_or_missing_category() {
        let json = r#"[
            {"id": 1, "category": null, "title": "sin categoría"},
            {"id": 2, "title": null, "description": null, "authorname": null},
            {"id": 3, "category": "Ajedrez", "title": "t"}
        ]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].category, "");
        assert_eq!(posts[1].category, "");
        assert_eq!(posts[1].title, "");
        assert_eq!(posts[1].author_name, "");
        assert_eq!(posts[2].category, "Ajedrez");
    }

    #[test]
    fn test_comment_accepts_both_spellings() {
        let camel = r#"{"id": 1, "publicationId": 4, "usuarioId": 2, "contenido": "hola",
                        "autorNombre": "ana", "fechaCreacion": "2025-03-01T10:00:00"}"#;
        let snake = r#"{"id": 2, "publicacion_id": 4, "usuario_id": 9, "contenido": "chao",
                        "fecha_creacion": "2025-03-01T10:00:00"}"#;

        let a: Comment = serde_json::from_str(camel).unwrap();
        let b: Comment = serde_json::from_str(snake).unwrap();

        assert_eq!(a.post_id, 4);
        assert_eq!(a.display_author(), "ana");
        assert_eq!(b.post_id, 4);
        assert_eq!(b.display_author(), "Usuario 9");
    }

    #[test]
    fn test_new_post_serializes_null_image() {
        let body = NewPost {
            userid: 5,
            category: "Indie".to_string(),
            image_uri: None,
            title: "t".to_string(),
            description: "d".to_string(),
            authorname: "ana".to_string(),
            status: "ACTIVE",
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["imageUri"], serde_json::Value::Null);
        assert_eq!(value["status"], "ACTIVE");
        assert_eq!(value["userid"], 5);
    }

    #[test]
    fn test_login_response_numeric_ids() {
        let json = r#"{"token": "abc", "usuario_id": 42, "nombre_usuario": "vega", "rol_id": 1}"#;
        let res: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.usuario_id, "42");
        assert_eq!(res.rol_id, "1");
    }
}
