//! Tray.ai connector entry point.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use tessera_connector::config::ConnectorConfig;
use tessera_connector::error::ConnectorResult;
use tessera_connector::traits::{
    AccountField, AccountSchema, Connector, ConnectorMetadata, ResourceSyncer,
};

use crate::client::{ListParams, TrayClient};
use crate::config::TrayConfig;
use crate::roles::RoleSyncer;
use crate::users::UserSyncer;
use crate::workspaces::WorkspaceSyncer;

/// The Tray.ai connector.
///
/// Holds one shared API client; syncers are created per call and borrow
/// nothing mutable, so the connector is `Send + Sync` as the host requires.
#[derive(Debug)]
pub struct TrayConnector {
    client: Arc<TrayClient>,
}

impl TrayConnector {
    /// Creates a connector from a configuration.
    ///
    /// # Errors
    ///
    /// Configuration problems are fatal here, before any sync attempt.
    pub fn new(config: TrayConfig) -> ConnectorResult<Self> {
        config.validate()?;

        let client = TrayClient::new(config).map_err(|e| e.into_connector("init connector"))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

#[async_trait]
impl Connector for TrayConnector {
    fn metadata(&self) -> ConnectorMetadata {
        ConnectorMetadata {
            display_name: "Tray.ai".to_string(),
            description: "Syncs users, workspaces, and workspace roles from Tray.ai".to_string(),
            account_schema: Some(AccountSchema {
                fields: vec![
                    AccountField {
                        name: "name".to_string(),
                        display_name: "Name".to_string(),
                        description: "User name".to_string(),
                        placeholder: "Name".to_string(),
                        required: true,
                        order: 1,
                    },
                    AccountField {
                        name: "email".to_string(),
                        display_name: "Email".to_string(),
                        description: "This email will be used as the login for the user."
                            .to_string(),
                        placeholder: "Email".to_string(),
                        required: true,
                        order: 2,
                    },
                    AccountField {
                        name: "organizationRoleId".to_string(),
                        display_name: "Role".to_string(),
                        description: "user's role in organization".to_string(),
                        placeholder: "organizationRoleID".to_string(),
                        required: true,
                        order: 3,
                    },
                ],
            }),
        }
    }

    fn resource_syncers(&self) -> Vec<Arc<dyn ResourceSyncer>> {
        vec![
            Arc::new(UserSyncer::new(Arc::clone(&self.client))),
            Arc::new(WorkspaceSyncer::new(Arc::clone(&self.client))),
            Arc::new(RoleSyncer::new(Arc::clone(&self.client))),
        ]
    }

    /// Exercises the configured credentials with a one-item user listing.
    #[instrument(skip(self))]
    async fn validate(&self) -> ConnectorResult<()> {
        let params = ListParams {
            first: Some(1),
            ..ListParams::default()
        };

        self.client
            .list_users(&params)
            .await
            .map_err(|e| e.into_connector("validate"))?;

        Ok(())
    }
}
