//! Account and session commands

use crate::app::LedgerContext;
use crate::error::Result;
use crate::storage::{SessionData, SessionStore};
use std::io::Write;

pub async fn init_db(db: &str, out: &mut dyn Write) -> Result<()> {
    LedgerContext::open(db).await?;
    writeln!(out, "Initialized database at {}", db)?;
    Ok(())
}

pub async fn register(
    db: &str,
    username: &str,
    password: &str,
    email: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    let ctx = LedgerContext::open(db).await?;
    let user = ctx.auth().register(username, password, email).await?;

    writeln!(out, "registered user: {} (id={})", user.name, user.id)?;
    Ok(())
}

pub async fn login(
    db: &str,
    sessions: &SessionStore,
    username: &str,
    password: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let ctx = LedgerContext::open(db).await?;
    let user = ctx.auth().login(username, password).await?;

    sessions
        .save(&SessionData {
            db: ctx.db_url().to_string(),
            user: user.name.clone(),
        })
        .await?;

    writeln!(out, "login ok: {}", user.name)?;
    Ok(())
}

pub async fn logout(sessions: &SessionStore, out: &mut dyn Write) -> Result<()> {
    sessions.clear().await?;
    writeln!(out, "logged out.")?;
    Ok(())
}

pub async fn whoami(sessions: &SessionStore, out: &mut dyn Write) -> Result<()> {
    match sessions.load().await {
        Some(session) => writeln!(out, "user={} db={}", session.user, session.db)?,
        None => writeln!(out, "not logged in")?,
    }
    Ok(())
}

pub async fn change_password(
    db: &str,
    sessions: &SessionStore,
    old: &str,
    new: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let session = sessions.require(db).await?;
    let ctx = LedgerContext::open(db).await?;

    ctx.auth().change_password(&session.user, old, new).await?;

    writeln!(out, "password changed.")?;
    Ok(())
}
