use anyhow::Result;

use sandogh::adapters::manifest;
use sandogh::drivers::db::Db;
use sandogh::interactors::properties::PropertyStore;
use sandogh::interactors::setup::{Setup, USER_KEYS};

#[test]
fn it_provisions_a_manifest_into_a_fresh_store() -> Result<()> {
    let db = Db::temporary()?;
    let users = manifest::parse(r#"[{"user":"a","key":"1"},{"user":"b","key":"2"}]"#)?;

    Setup::with_users(users).run(&db)?;

    assert_eq!(
        db.get(USER_KEYS)?.as_deref(),
        Some(r#"[{"user":"a","key":"1"},{"user":"b","key":"2"}]"#)
    );

    Ok(())
}

#[test]
fn it_replaces_an_earlier_provisioning_run() -> Result<()> {
    let db = Db::temporary()?;

    let mut setup = Setup::new();
    setup.add_user("usuario", "password");
    setup.run(&db)?;

    setup.add_user("segundo", "secreto");
    setup.run(&db)?;

    assert_eq!(
        db.get(USER_KEYS)?.as_deref(),
        Some(r#"[{"user":"usuario","key":"password"},{"user":"segundo","key":"secreto"}]"#)
    );

    Ok(())
}

#[test]
fn it_leaves_other_properties_alone() -> Result<()> {
    let db = Db::temporary()?;
    db.set("API_TOKEN", "abc123")?;

    let mut setup = Setup::new();
    setup.add_user("usuario", "password");
    setup.run(&db)?;

    assert_eq!(db.get("API_TOKEN")?.as_deref(), Some("abc123"));

    Ok(())
}
