use anyhow::Result;
use dot_tracker::TrackerError;
use dot_tracker::commands;
use dot_tracker::output::{Reporter, Verbosity};
use dot_tracker::tracking::{Group, Manifest, PathRemoval};
use std::fs;
use std::path::{Path, PathBuf};

mod common;
use common::TestEnvironment;

fn quiet() -> Reporter {
    Reporter::new(Verbosity::Quiet)
}

#[test]
fn test_add_flush_reload_single_group() -> Result<()> {
    let env = TestEnvironment::new()?;
    let (mut manifest, err) = env.ctx.open_manifest();
    assert!(matches!(
        err,
        Some(TrackerError::ManifestLoad { missing: true, .. })
    ));
    assert!(manifest.is_empty());

    manifest.add_group(Group::new(
        Some("vim".to_string()),
        vec![PathBuf::from("/home/u/.vimrc")],
    ));
    manifest.flush()?;

    let (reloaded, err) = env.ctx.open_manifest();
    assert!(err.is_none());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.groups()[0].id(), "vim");
    assert_eq!(
        reloaded.groups()[0].paths(),
        &[PathBuf::from("/home/u/.vimrc")]
    );

    Ok(())
}

#[test]
fn test_duplicate_add_aborts_without_mutation() -> Result<()> {
    let env = TestEnvironment::new()?;
    let vimrc = env.create_file("a/.vimrc", "set nu")?;
    let arg = TestEnvironment::arg(&vimrc);

    commands::add::execute(&env.ctx, &quiet(), &[arg.clone()], Some("editors"), false)?;
    let before = fs::read_to_string(&env.manifest_path)?;

    let err = commands::add::execute(&env.ctx, &quiet(), &[arg], Some("again"), false)
        .expect_err("second add must be refused");
    assert!(matches!(
        err.downcast_ref::<TrackerError>(),
        Some(TrackerError::AlreadyTracked { .. })
    ));

    assert_eq!(fs::read_to_string(&env.manifest_path)?, before);
    let (manifest, _) = env.ctx.open_manifest();
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.groups()[0].id(), "editors");

    Ok(())
}

#[test]
fn test_overwrite_allows_second_group() -> Result<()> {
    let env = TestEnvironment::new()?;
    let zshrc = env.create_file(".zshrc", "one")?;
    let arg = TestEnvironment::arg(&zshrc);

    commands::add::execute(&env.ctx, &quiet(), &[arg.clone()], Some("shell"), false)?;
    fs::write(&zshrc, "two")?;
    commands::add::execute(&env.ctx, &quiet(), &[arg], Some("shell2"), true)?;

    let (manifest, _) = env.ctx.open_manifest();
    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest.find_by_path(&zshrc).len(), 2);
    assert_eq!(fs::read_to_string(env.store_dir.join(".zshrc"))?, "two");

    Ok(())
}

#[test]
fn test_add_directory_copies_tree() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.create_file(".config/nvim/init.lua", "vim.o.number = true")?;
    env.create_file(".config/nvim/lua/keys.lua", "-- keys")?;
    let nvim = env.home_dir.join(".config/nvim");

    commands::add::execute(
        &env.ctx,
        &quiet(),
        &[TestEnvironment::arg(&nvim)],
        Some("nvim"),
        false,
    )?;

    assert!(env.store_dir.join("nvim/init.lua").is_file());
    assert_eq!(
        fs::read_to_string(env.store_dir.join("nvim/lua/keys.lua"))?,
        "-- keys"
    );

    Ok(())
}

#[test]
fn test_add_without_group_generates_id() -> Result<()> {
    let env = TestEnvironment::new()?;
    let tmux = env.create_file(".tmux.conf", "set -g mouse on")?;

    commands::add::execute(
        &env.ctx,
        &quiet(),
        &[TestEnvironment::arg(&tmux)],
        None,
        false,
    )?;

    let (manifest, _) = env.ctx.open_manifest();
    assert_eq!(manifest.len(), 1);
    assert!(uuid_like(manifest.groups()[0].id()));

    Ok(())
}

fn uuid_like(id: &str) -> bool {
    let parts: Vec<&str> = id.split('-').collect();
    parts.iter().map(|p| p.len()).collect::<Vec<_>>() == [8, 4, 4, 4, 12]
        && parts
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_hexdigit()))
}

#[test]
fn test_find_by_path_through_symlink() -> Result<()> {
    let env = TestEnvironment::new()?;
    let real = env.create_file("real/.gitconfig", "[user]")?;

    let mut manifest = Manifest::new(env.store_dir.clone(), env.manifest_path.clone());
    manifest.add_group(Group::new(Some("git".to_string()), vec![real.clone()]));

    #[cfg(unix)]
    {
        let link = env.home_dir.join(".gitconfig");
        std::os::unix::fs::symlink(&real, &link)?;
        let found = manifest.find_by_path(&link);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].group.id(), "git");
        assert_eq!(found[0].path, real.as_path());
    }

    let dotted = env.home_dir.join("real/./../real/.gitconfig");
    assert_eq!(manifest.find_by_path(&dotted).len(), 1);

    Ok(())
}

#[test]
fn test_rename_and_remove_scenarios() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut manifest = Manifest::new(env.store_dir.clone(), env.manifest_path.clone());
    manifest.add_group(Group::new(Some("app".into()), vec!["/a".into(), "/b".into()]));
    manifest.add_group(Group::new(Some("app".into()), vec!["/c".into()]));
    manifest.flush()?;

    assert!(!manifest.rename_group("old", "new")?);
    assert!(manifest.rename_group("app", "first")?);
    assert_eq!(manifest.groups()[0].id(), "first");
    assert_eq!(manifest.groups()[1].id(), "app");

    assert_eq!(
        manifest.remove_path_from_group("first", Path::new("/a"))?,
        PathRemoval::Removed
    );
    assert_eq!(manifest.groups()[0].paths(), &[PathBuf::from("/b")]);

    manifest.add_group(Group::new(Some("app".into()), vec![]));
    assert!(manifest.remove_group("app"));
    assert_eq!(manifest.len(), 1);
    manifest.flush()?;

    let (reloaded, _) = env.ctx.open_manifest();
    assert_eq!(reloaded.groups(), manifest.groups());

    Ok(())
}

#[test]
fn test_unreadable_manifest_reports_and_starts_empty() -> Result<()> {
    let env = TestEnvironment::new()?;
    fs::create_dir_all(&env.store_dir)?;
    fs::write(&env.manifest_path, "id: vim\npaths: {not: a list}\n")?;

    let (manifest, err) = env.ctx.open_manifest();
    assert!(manifest.is_empty());
    match err {
        Some(TrackerError::ManifestLoad { missing, .. }) => assert!(!missing),
        other => panic!("expected load error, got {other:?}"),
    }

    Ok(())
}
