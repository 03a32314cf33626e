//! Pages
//!
//! One component per route.

mod admin;
mod cuenta;
mod donaciones;
mod hilo_detalle;
mod home;
mod inicio_sesion;
mod principal;

pub use admin::Admin;
pub use cuenta::Cuenta;
pub use donaciones::Donaciones;
pub use hilo_detalle::HiloDetalle;
pub use home::Home;
pub use inicio_sesion::InicioSesion;
pub use principal::Principal;
