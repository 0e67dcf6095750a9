use anyhow::Result;
use calshare_core::{Desktop, TzdbProvider, UserAgentContext, deliver_ics, generate_ics};

use super::EventArgs;
use crate::config::Config;

pub fn run(args: EventArgs, user_agent: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let event = args.into_event(&config)?;

    let content = generate_ics(&event, &TzdbProvider::default())?;
    let delivered = match user_agent {
        Some(ua) => deliver_ics(&content, &UserAgentContext::new(ua)),
        None => deliver_ics(&content, &Desktop),
    };

    println!("{}", delivered);
    Ok(())
}
