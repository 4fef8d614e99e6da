use crate::{
    error::{auth::AuthError, AppError},
    model::kajabi::{UpdateMemberRequest, UpdateMemberVariables, UPDATE_MEMBER_MUTATION},
    service::kajabi::KajabiService,
};

impl KajabiService<'_> {
    /// Writes a Discord user id into the `discord_id` custom field of the
    /// Kajabi member record identified by `member_id`.
    ///
    /// Setting the field to the same value twice is a no-op on Kajabi's
    /// side, so re-running the flow for an already-linked member is safe.
    pub async fn link_discord_id(&self, member_id: &str, discord_id: &str) -> Result<(), AppError> {
        let request = UpdateMemberRequest {
            query: UPDATE_MEMBER_MUTATION,
            variables: UpdateMemberVariables {
                id: member_id,
                discord_id,
            },
        };

        let response = self
            .http_client
            .post(&self.config.kajabi_api_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.kajabi_api_key),
            )
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::KajabiUpdate {
                status: response.status().as_u16(),
            }
            .into());
        }

        tracing::info!("Updated Kajabi member {} with Discord ID {}", member_id, discord_id);

        Ok(())
    }
}
