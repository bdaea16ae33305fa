//! # Structural Validation
//!
//! Checks an operation using only its own fields. No chain state is read.
//!
//! | Operation | Checks |
//! |-----------|--------|
//! | all | fee in core asset, non-negative; canonical extension bag |
//! | `PlatformCreate` | pledge; name non-empty; string bounds |
//! | `PlatformUpdate` | at least one field present; present fields as create |
//! | `PlatformVoteUpdate` | add/remove sets disjoint, no zero ids |
//! | `Post` | ids non-zero; origin all-or-nothing; string bounds; known extensions |
//! | `PostUpdate` | ids non-zero; at least one field present; known extensions |

use shared_types::{AccountUid, Asset};

use super::errors::ValidationError;
use super::extensions::{decode_post_extensions, Extensions};
use super::operations::{
    Operation, PlatformCreateOperation, PlatformUpdateOperation, PlatformVoteUpdateOperation,
    PostOperation, PostUpdateOperation,
};

pub const MAX_PLATFORM_NAME_LENGTH: usize = 100;
pub const MAX_URL_LENGTH: usize = 200;
pub const MAX_EXTRA_DATA_LENGTH: usize = 32 * 1024;
pub const MAX_HASH_VALUE_LENGTH: usize = 128;
pub const MAX_TITLE_LENGTH: usize = 400;
pub const MAX_BODY_LENGTH: usize = 64 * 1024;

/// Validates the operation's intra-operation invariants.
pub fn validate(op: &Operation) -> Result<(), ValidationError> {
    check_fee_claim_shape(op.fee())?;
    match op {
        Operation::PlatformCreate(op) => validate_platform_create(op)?,
        Operation::PlatformUpdate(op) => validate_platform_update(op)?,
        Operation::PlatformVoteUpdate(op) => validate_platform_vote_update(op)?,
        Operation::Post(op) => validate_post(op)?,
        Operation::PostUpdate(op) => validate_post_update(op)?,
    }
    Ok(())
}

fn validate_platform_create(op: &PlatformCreateOperation) -> Result<(), ValidationError> {
    check_account("account", op.account)?;
    check_pledge("pledge", &op.pledge)?;
    check_required_string("name", &op.name, MAX_PLATFORM_NAME_LENGTH)?;
    check_string("url", &op.url, MAX_URL_LENGTH)?;
    check_string("extra_data", &op.extra_data, MAX_EXTRA_DATA_LENGTH)?;
    op.extensions.check_canonical()
}

fn validate_platform_update(op: &PlatformUpdateOperation) -> Result<(), ValidationError> {
    check_account("account", op.account)?;
    if op.is_noop() {
        return Err(ValidationError::inconsistent(
            "platform update must change at least one field",
        ));
    }
    if let Some(pledge) = &op.new_pledge {
        check_pledge("new_pledge", pledge)?;
    }
    if let Some(name) = &op.new_name {
        check_required_string("new_name", name, MAX_PLATFORM_NAME_LENGTH)?;
    }
    if let Some(url) = &op.new_url {
        check_string("new_url", url, MAX_URL_LENGTH)?;
    }
    if let Some(extra_data) = &op.new_extra_data {
        check_string("new_extra_data", extra_data, MAX_EXTRA_DATA_LENGTH)?;
    }
    op.extensions.check_canonical()
}

fn validate_platform_vote_update(op: &PlatformVoteUpdateOperation) -> Result<(), ValidationError> {
    check_account("voter", op.voter)?;
    if op.platform_to_add.contains(&0) {
        return Err(ValidationError::malformed("platform_to_add", "contains account 0"));
    }
    if op.platform_to_remove.contains(&0) {
        return Err(ValidationError::malformed(
            "platform_to_remove",
            "contains account 0",
        ));
    }
    if let Some(uid) = op
        .platform_to_add
        .intersection(&op.platform_to_remove)
        .next()
    {
        return Err(ValidationError::inconsistent(format!(
            "platform {} is both added and removed",
            uid
        )));
    }
    op.extensions.check_canonical()
}

fn validate_post(op: &PostOperation) -> Result<(), ValidationError> {
    check_post_pid("post_pid", op.post_pid)?;
    check_account("platform", op.platform)?;
    check_account("poster", op.poster)?;

    let present = [
        op.origin_poster.is_some(),
        op.origin_post_pid.is_some(),
        op.origin_platform.is_some(),
    ];
    if present.iter().any(|p| *p) && !present.iter().all(|p| *p) {
        return Err(ValidationError::inconsistent(
            "origin_poster, origin_post_pid and origin_platform must be set together",
        ));
    }
    if let Some(origin) = op.origin() {
        check_account("origin_poster", origin.poster)?;
        check_post_pid("origin_post_pid", origin.post_pid)?;
        check_account("origin_platform", origin.platform)?;
    }

    check_required_string("hash_value", &op.hash_value, MAX_HASH_VALUE_LENGTH)?;
    check_string("extra_data", &op.extra_data, MAX_EXTRA_DATA_LENGTH)?;
    check_string("title", &op.title, MAX_TITLE_LENGTH)?;
    check_string("body", &op.body, MAX_BODY_LENGTH)?;
    check_post_extensions(&op.extensions)
}

fn validate_post_update(op: &PostUpdateOperation) -> Result<(), ValidationError> {
    check_account("platform", op.platform)?;
    check_account("poster", op.poster)?;
    check_post_pid("post_pid", op.post_pid)?;
    if op.is_noop() {
        return Err(ValidationError::inconsistent(
            "post update must change at least one field",
        ));
    }
    if let Some(hash_value) = &op.hash_value {
        check_required_string("hash_value", hash_value, MAX_HASH_VALUE_LENGTH)?;
    }
    if let Some(extra_data) = &op.extra_data {
        check_string("extra_data", extra_data, MAX_EXTRA_DATA_LENGTH)?;
    }
    if let Some(title) = &op.title {
        check_string("title", title, MAX_TITLE_LENGTH)?;
    }
    if let Some(body) = &op.body {
        check_string("body", body, MAX_BODY_LENGTH)?;
    }
    check_post_extensions(&op.extensions)
}

fn check_post_extensions(bag: &Extensions) -> Result<(), ValidationError> {
    bag.check_canonical()?;
    decode_post_extensions(bag).map(|_| ())
}

fn check_fee_claim_shape(fee: &Asset) -> Result<(), ValidationError> {
    if !fee.is_core() {
        return Err(ValidationError::malformed(
            "fee",
            format!("must be paid in the core asset, got asset {}", fee.asset_id),
        ));
    }
    if fee.amount < 0 {
        return Err(ValidationError::malformed("fee", "amount is negative"));
    }
    Ok(())
}

fn check_pledge(field: &'static str, pledge: &Asset) -> Result<(), ValidationError> {
    if !pledge.is_core() {
        return Err(ValidationError::malformed(
            field,
            format!("must be in the core asset, got asset {}", pledge.asset_id),
        ));
    }
    if pledge.amount < 0 {
        return Err(ValidationError::malformed(field, "amount is negative"));
    }
    Ok(())
}

fn check_account(field: &'static str, uid: AccountUid) -> Result<(), ValidationError> {
    if uid == 0 {
        return Err(ValidationError::malformed(field, "account id must be non-zero"));
    }
    Ok(())
}

fn check_post_pid(field: &'static str, pid: u64) -> Result<(), ValidationError> {
    if pid == 0 {
        return Err(ValidationError::malformed(field, "post id must be non-zero"));
    }
    Ok(())
}

fn check_required_string(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::malformed(field, "must not be empty"));
    }
    check_string(field, value, max)
}

fn check_string(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        return Err(ValidationError::malformed(
            field,
            format!("{} bytes exceeds limit of {}", value.len(), max),
        ));
    }
    Ok(())
}
