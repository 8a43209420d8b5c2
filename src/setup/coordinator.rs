use super::access::{AccessState, ADMIN_ALL_OBJECTS};
use super::credentials::{make_stanza, normalize_realm, validate_credential_fields};
use crate::platform::{
    AppConfigRecord, CredentialFields, CredentialRecord, PlatformClient, PlatformError,
};
use crate::view::SetupObserver;
use tracing::{info, warn};

pub type CurrentAppFn = Box<dyn Fn() -> Option<String>>;

pub struct SetupCoordinator {
    client: PlatformClient,
    app_name: Option<String>,
    current_app: Option<CurrentAppFn>,
    app_config: Option<AppConfigRecord>,
    is_app_configured: Option<bool>,
    access: AccessState,
}

impl SetupCoordinator {
    pub fn new(client: PlatformClient) -> Self {
        Self {
            client,
            app_name: None,
            current_app: None,
            app_config: None,
            is_app_configured: None,
            access: AccessState::default(),
        }
    }

    pub fn with_app_name(client: PlatformClient, app_name: impl Into<String>) -> Self {
        let mut coordinator = Self::new(client);
        coordinator.app_name = Some(app_name.into());
        coordinator
    }

    pub fn set_current_app_source(&mut self, source: CurrentAppFn) {
        self.current_app = Some(source);
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn is_configured(&self) -> Option<bool> {
        self.is_app_configured
    }

    pub fn app_config(&self) -> Option<&AppConfigRecord> {
        self.app_config.as_ref()
    }

    fn resolve_app_name(&mut self) -> Option<String> {
        if self.app_name.is_none() {
            self.app_name = self.current_app.as_ref().and_then(|source| source());
        }
        if self.app_name.is_none() {
            warn!("no app name is configured and no ambient default is available");
        }
        self.app_name.clone()
    }

    pub fn load_config(&mut self, app_name: Option<&str>) -> Option<&AppConfigRecord> {
        if let Some(app_name) = app_name {
            self.app_name = Some(app_name.to_string());
        }
        let app_name = self.resolve_app_name()?;

        match self.client.get_app_config(&app_name) {
            Ok(record) => {
                info!("successfully retrieved the app configuration");
                self.is_app_configured = Some(record.configured);
                self.app_config = Some(record);
                self.app_config.as_ref()
            }
            Err(err) => {
                warn!("unable to retrieve the app configuration: {err}");
                None
            }
        }
    }

    pub fn mark_configured(&mut self) {
        if self.is_app_configured == Some(true) {
            info!("app is already marked configured; no need to update it");
            return;
        }
        let Some(app_name) = self.resolve_app_name() else {
            return;
        };

        if let Some(config) = self.app_config.as_mut() {
            config.configured = true;
        }

        match self.client.set_app_configured(&app_name) {
            Ok(()) => {
                info!("app configuration was successfully updated");
                self.is_app_configured = Some(true);
            }
            Err(err) => warn!("app configuration was not successfully updated: {err}"),
        }
    }

    pub fn fetch_credential(&self, stanza: &str) -> Result<CredentialRecord, PlatformError> {
        match self.client.get_credential(stanza) {
            Ok(record) => {
                info!("successfully retrieved the encrypted credential");
                Ok(record)
            }
            Err(err) => {
                warn!("unable to retrieve the encrypted credential: {err}");
                Err(err)
            }
        }
    }

    pub fn save_credential(
        &mut self,
        username: &str,
        password: &str,
        realm: Option<&str>,
        observer: &mut dyn SetupObserver,
    ) {
        if let Err(message) = validate_credential_fields(username, password) {
            observer.alert(message);
            return;
        }

        let stanza = make_stanza(username, realm);
        let fields = CredentialFields::new(username, password, normalize_realm(realm));

        match self.fetch_credential(&stanza) {
            Ok(_existing) => {
                match self.client.update_credential(&stanza, &fields) {
                    Ok(()) => info!("credential was successfully saved"),
                    Err(err) => warn!("credential was not successfully updated: {err}"),
                }
                observer.credential_saved(false);
            }
            Err(_) => {
                let Some(app_name) = self.resolve_app_name() else {
                    return;
                };
                match self.client.create_credential(&app_name, &fields) {
                    Ok(()) => info!("credential was successfully saved"),
                    Err(err) => warn!("credential was not successfully updated: {err}"),
                }
                observer.credential_saved(true);
            }
        }
    }

    pub fn has_capability(&mut self, capability: &str) -> bool {
        self.access.has_capability(&self.client, capability)
    }

    pub fn user_has_admin_all_objects(&mut self) -> bool {
        self.has_capability(ADMIN_ALL_OBJECTS)
    }
}
