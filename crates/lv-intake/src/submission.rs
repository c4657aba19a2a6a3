use serde::Deserialize;

use lv_types::{ClientVersion, MenuId};

use crate::error::IntakeError;

/// Legacy single-choice body: `{"menu": "<uuid>"}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LegacyPayload {
    pub menu: MenuId,
}

/// One entry of a ranked body: `{"menu": "<uuid>", "points": 3}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankedEntry {
    pub menu: MenuId,
    pub points: i64,
}

/// Ranked three-choice body: `{"votes": [{menu, points}, ...]}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankedPayload {
    pub votes: Vec<RankedEntry>,
}

/// A decoded submission, tagged by the protocol generation that produced it.
#[derive(Clone, Debug)]
pub enum VoteSubmission {
    Legacy(LegacyPayload),
    Ranked(RankedPayload),
}

impl VoteSubmission {
    /// Decode a raw body under the shape the client version negotiated.
    ///
    /// The version header decides the expected shape before the body is
    /// interpreted; a body that does not decode under that shape is a
    /// [`IntakeError::MalformedSubmission`], never a fallback to the other
    /// protocol.
    pub fn decode(
        version: ClientVersion,
        body: &serde_json::Value,
    ) -> Result<Self, IntakeError> {
        if version.supports_ranked_voting() {
            serde_json::from_value::<RankedPayload>(body.clone())
                .map(Self::Ranked)
                .map_err(|e| IntakeError::malformed(format!("ranked body: {e}")))
        } else {
            serde_json::from_value::<LegacyPayload>(body.clone())
                .map(Self::Legacy)
                .map_err(|e| IntakeError::malformed(format!("legacy body: {e}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn legacy_version() -> ClientVersion {
        ClientVersion::OLDEST_SUPPORTED
    }

    fn ranked_version() -> ClientVersion {
        ClientVersion::RANKED_VOTING_MIN
    }

    #[test]
    fn legacy_body_decodes_under_old_version() {
        let body = json!({ "menu": MenuId::new() });
        let decoded = VoteSubmission::decode(legacy_version(), &body).unwrap();
        assert!(matches!(decoded, VoteSubmission::Legacy(_)));
    }

    #[test]
    fn ranked_body_decodes_under_new_version() {
        let body = json!({
            "votes": [
                { "menu": MenuId::new(), "points": 3 },
                { "menu": MenuId::new(), "points": 2 },
                { "menu": MenuId::new(), "points": 1 },
            ]
        });
        let decoded = VoteSubmission::decode(ranked_version(), &body).unwrap();
        match decoded {
            VoteSubmission::Ranked(payload) => assert_eq!(payload.votes.len(), 3),
            other => panic!("expected ranked, got {other:?}"),
        }
    }

    #[test]
    fn shape_is_fixed_by_version_not_body() {
        // A ranked body from a legacy client does not silently upgrade.
        let ranked_body = json!({ "votes": [{ "menu": MenuId::new(), "points": 3 }] });
        let error = VoteSubmission::decode(legacy_version(), &ranked_body).unwrap_err();
        assert_eq!(error.kind(), "malformed_submission");

        // And a legacy body from a new client does not downgrade.
        let legacy_body = json!({ "menu": MenuId::new() });
        let error = VoteSubmission::decode(ranked_version(), &legacy_body).unwrap_err();
        assert_eq!(error.kind(), "malformed_submission");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let body = json!({ "menu": MenuId::new(), "extra": true });
        assert!(VoteSubmission::decode(legacy_version(), &body).is_err());
    }

    #[test]
    fn bad_uuid_is_malformed() {
        let body = json!({ "menu": "not-a-uuid" });
        let error = VoteSubmission::decode(legacy_version(), &body).unwrap_err();
        assert_eq!(error.kind(), "malformed_submission");
    }
}
