use crate::platform::PlatformClient;
use tracing::warn;

pub const ADMIN_ALL_OBJECTS: &str = "admin_all_objects";
pub const FREE_LICENSE_GROUP: &str = "Free";

#[derive(Debug, Clone, Default)]
pub(crate) struct AccessState {
    capabilities: Option<Vec<String>>,
    free_license: Option<bool>,
}

impl AccessState {
    pub(crate) fn has_capability(&mut self, client: &PlatformClient, capability: &str) -> bool {
        if self.capabilities.is_none() {
            match client.current_capabilities() {
                Ok(capabilities) => self.capabilities = Some(capabilities),
                Err(err) => {
                    warn!("unable to retrieve the session capabilities: {err}");
                    self.capabilities = Some(Vec::new());
                }
            }
        }

        let no_capabilities = self.capabilities.as_ref().map_or(true, Vec::is_empty);
        if no_capabilities && self.free_license.is_none() {
            self.free_license = Some(match client.license_group_active(FREE_LICENSE_GROUP) {
                Ok(active) => active,
                Err(err) => {
                    warn!("unable to determine whether the free license is active: {err}");
                    false
                }
            });
        }

        if self.free_license == Some(true) {
            return true;
        }

        self.capabilities
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|held| held == capability)
    }
}
