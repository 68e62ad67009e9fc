//! Schema migration framework.

use crate::StudyError;
use crate::schema::Study;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut study: Study) -> Result<Study, StudyError> {
    while study.version < LATEST_VERSION {
        study = migrate_one_version(study)?;
    }
    Ok(study)
}

fn migrate_one_version(study: Study) -> Result<Study, StudyError> {
    match study.version {
        0 => migrate_v0_to_v1(study),
        v => Err(StudyError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files used the narrow `[0.7, 1.1]` Z bracket implicitly; it is
/// now written out so a missing bracket can default to the wide one.
fn migrate_v0_to_v1(mut study: Study) -> Result<Study, StudyError> {
    if study.z_bracket.is_none() {
        study.z_bracket = Some(crate::schema::BracketDef {
            low: 0.7,
            high: 1.1,
        });
    }
    study.version = 1;
    Ok(study)
}
