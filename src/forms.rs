//! Form State and Validation
//!
//! Field values for every form in the app, with the client-side checks that
//! run before anything is sent. Invalid forms never reach the network.

use std::sync::OnceLock;

use regex::Regex;

use crate::config;
use crate::error::FieldErrors;
use crate::models::{NewComment, NewPost, ProfileUpdate};
use crate::session::Author;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// A form that turns into a request body once it validates
pub trait Draft {
    type Payload;

    fn validate(&self, author: &Author) -> Result<Self::Payload, FieldErrors>;

    /// Reset the user-entered fields after a successful submission
    fn clear(&mut self);
}

/// "Nueva Publicación" modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub category: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl Draft for PostDraft {
    type Payload = NewPost;

    fn validate(&self, author: &Author) -> Result<NewPost, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.category.is_empty() {
            errors.push("category", "Selecciona una categoría.");
        }
        if self.title.trim().is_empty() {
            errors.push("title", "El título es obligatorio.");
        }
        if self.description.trim().is_empty() {
            errors.push("description", "La descripción es obligatoria.");
        }
        errors.into_result()?;

        let image = self.image_url.trim();
        Ok(NewPost {
            userid: author.id,
            category: self.category.clone(),
            image_uri: (!image.is_empty()).then(|| image.to_string()),
            title: self.title.clone(),
            description: self.description.clone(),
            authorname: author.name.clone(),
            status: "ACTIVE",
        })
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Comment box under a post
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub post_id: u32,
    pub content: String,
}

impl CommentDraft {
    pub fn for_post(post_id: u32) -> Self {
        Self {
            post_id,
            content: String::new(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

impl Draft for CommentDraft {
    type Payload = NewComment;

    fn validate(&self, author: &Author) -> Result<NewComment, FieldErrors> {
        let mut errors = FieldErrors::new();
        if !self.can_submit() {
            errors.push("content", "Escribe un comentario.");
        }
        errors.into_result()?;

        Ok(NewComment {
            publication_id: self.post_id,
            usuario_id: author.id,
            contenido: self.content.clone(),
            autor_nombre: author.name.clone(),
        })
    }

    fn clear(&mut self) {
        self.content.clear();
    }
}

/// Account settings form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.push("username", "El nombre de usuario es obligatorio.");
        }
        if self.email.trim().is_empty() {
            errors.push("email", "El correo electrónico es obligatorio.");
        } else if !email_regex().is_match(&self.email) {
            errors.push("email", "Formato de email no válido.");
        }
        errors.into_result()?;

        Ok(ProfileUpdate {
            nombre_usuario: self.username.clone(),
            correo: self.email.clone(),
        })
    }

    /// Save stays disabled while invalid or identical to what was loaded
    pub fn can_save(&self, baseline: &ProfileForm) -> bool {
        self != baseline && self.validate().is_ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.push("username", "Ingresa tu nombre de usuario.");
        }
        if self.password.is_empty() {
            errors.push("password", "Ingresa tu contraseña.");
        }
        errors.into_result()
    }
}

/// Preset donation amounts
pub const DONATION_AMOUNTS: &[u32] = &[1_000, 5_000, 10_000, 20_000];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub amount: Option<u32>,
    pub card_holder: String,
    pub card_number: String,
}

impl DonationForm {
    /// Returns the amount to donate
    pub fn validate(&self) -> Result<u32, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.amount.is_none() {
            errors.push("amount", "Selecciona un monto.");
        }
        if self.card_holder.trim().is_empty() {
            errors.push("card_holder", "Ingresa el nombre del titular.");
        }
        let digits: String = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            errors.push("card_number", "El número de tarjeta debe tener 16 dígitos.");
        }
        errors.into_result()?;
        Ok(self.amount.unwrap_or_default())
    }
}

/// Counter shown under the description box, e.g. "12/255"
pub fn chars_used(text: &str) -> String {
    format!("{}/{}", text.chars().count(), config::DESCRIPTION_MAX_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author { id: 5, name: "ana".to_string() }
    }

    #[test]
    fn test_post_draft_requires_fields() {
        let errors = PostDraft::default().validate(&author()).unwrap_err();
        assert!(errors.get("category").is_some());
        assert!(errors.get("title").is_some());
        assert!(errors.get("description").is_some());

        let draft = PostDraft {
            category: "RPG".into(),
            title: "   ".into(),
            description: "texto".into(),
            image_url: String::new(),
        };
        let errors = draft.validate(&author()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("title").is_some());
    }

    #[test]
    fn test_post_draft_payload() {
        let draft = PostDraft {
            category: "Indie".into(),
            title: "Mi juego".into(),
            description: "Un plataformas".into(),
            image_url: "  ".into(),
        };
        let body = draft.validate(&author()).unwrap();
        assert_eq!(body.userid, 5);
        assert_eq!(body.authorname, "ana");
        assert_eq!(body.image_uri, None);
        assert_eq!(body.status, "ACTIVE");

        let with_image = PostDraft { image_url: "https://img/x.png".into(), ..draft };
        assert_eq!(
            with_image.validate(&author()).unwrap().image_uri.as_deref(),
            Some("https://img/x.png")
        );
    }

    #[test]
    fn test_comment_draft() {
        let mut draft = CommentDraft::for_post(9);
        assert!(!draft.can_submit());
        assert!(draft.validate(&author()).is_err());

        draft.content = "Buen post".into();
        let body = draft.validate(&author()).unwrap();
        assert_eq!(body.publication_id, 9);
        assert_eq!(body.autor_nombre, "ana");

        draft.clear();
        assert_eq!(draft, CommentDraft::for_post(9));
    }

    #[test]
    fn test_profile_email_format() {
        let form = ProfileForm { username: "vega".into(), email: "vega@example".into() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Formato de email no válido."));

        let form = ProfileForm { username: "vega".into(), email: "".into() };
        assert_eq!(
            form.validate().unwrap_err().get("email"),
            Some("El correo electrónico es obligatorio.")
        );

        let form = ProfileForm { username: "vega".into(), email: "vega@example.com".into() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_profile_can_save_only_when_changed() {
        let baseline = ProfileForm { username: "vega".into(), email: "vega@example.com".into() };
        assert!(!baseline.can_save(&baseline));

        let changed = ProfileForm { username: "vega2".into(), ..baseline.clone() };
        assert!(changed.can_save(&baseline));

        let invalid = ProfileForm { username: "".into(), ..baseline.clone() };
        assert!(!invalid.can_save(&baseline));
    }

    #[test]
    fn test_login_form() {
        assert_eq!(LoginForm::default().validate().unwrap_err().len(), 2);
        let form = LoginForm { username: "juan".into(), password: "secreto".into() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_donation_form() {
        let mut form = DonationForm {
            amount: Some(5_000),
            card_holder: "Juan".into(),
            card_number: "4111 1111 1111 1111".into(),
        };
        assert_eq!(form.validate(), Ok(5_000));

        form.card_number = "4111".into();
        assert!(form.validate().unwrap_err().get("card_number").is_some());

        form.amount = None;
        assert_eq!(form.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn test_chars_used() {
        assert_eq!(chars_used("ñandú"), "5/255");
    }
}
