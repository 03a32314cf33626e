//! Client-side Routes
//!
//! Views addressed by the URL hash (`#/hilo/12`).

/// Page that asked for a login, so the login view can explain why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOrigin {
    Admin,
    Donaciones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Principal,
    Hilo(u32),
    Cuenta,
    Admin,
    Donaciones,
    InicioSesion(Option<LoginOrigin>),
}

impl Route {
    /// Parse a path or hash (`/principal`, `#/hilo/3`). Unknown paths go home.
    pub fn parse(raw: &str) -> Self {
        let path = raw.trim_start_matches('#');
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["principal"] => Route::Principal,
            ["hilo", id] => id.parse().map(Route::Hilo).unwrap_or_default(),
            ["cuenta"] => Route::Cuenta,
            ["admin"] => Route::Admin,
            ["donaciones"] => Route::Donaciones,
            ["inicioSesion"] => Route::InicioSesion(match query {
                "from=admin" => Some(LoginOrigin::Admin),
                "from=donaciones" => Some(LoginOrigin::Donaciones),
                _ => None,
            }),
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Principal => "/principal".to_string(),
            Route::Hilo(id) => format!("/hilo/{}", id),
            Route::Cuenta => "/cuenta".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Donaciones => "/donaciones".to_string(),
            Route::InicioSesion(None) => "/inicioSesion".to_string(),
            Route::InicioSesion(Some(LoginOrigin::Admin)) => "/inicioSesion?from=admin".to_string(),
            Route::InicioSesion(Some(LoginOrigin::Donaciones)) => {
                "/inicioSesion?from=donaciones".to_string()
            }
        }
    }
}
