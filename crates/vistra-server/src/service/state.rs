//! Application state and dependency injection.

use vistra_rig::TutorService;

use crate::service::ServiceConfig;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    tutor_service: TutorService,
}

impl ServiceState {
    /// Creates the state around an already-built tutor service.
    pub fn new(tutor_service: TutorService) -> Self {
        Self { tutor_service }
    }

    /// Initializes application state from configuration.
    ///
    /// Builds the Gemini-backed tutor service; fails when the API key is
    /// rejected by the client constructor.
    pub fn from_config(config: &ServiceConfig) -> vistra_rig::Result<Self> {
        Ok(Self::new(TutorService::from_config(&config.rig)?))
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(tutor_service: TutorService);
