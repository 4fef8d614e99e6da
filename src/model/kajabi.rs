use serde::Serialize;

/// GraphQL mutation writing a Discord user id into the `discord_id` custom
/// field of a Kajabi member record.
pub const UPDATE_MEMBER_MUTATION: &str = "\
mutation($id: ID!, $discordId: String!) {
  updateMember(input: { id: $id, customFields: { discord_id: $discordId } }) {
    member { id }
  }
}";

#[derive(Serialize)]
pub struct UpdateMemberRequest<'a> {
    pub query: &'static str,
    pub variables: UpdateMemberVariables<'a>,
}

#[derive(Serialize)]
pub struct UpdateMemberVariables<'a> {
    /// Kajabi member id, round-tripped through the OAuth `state` parameter.
    pub id: &'a str,
    /// Discord user id to store on the member record.
    #[serde(rename = "discordId")]
    pub discord_id: &'a str,
}
