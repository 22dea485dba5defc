use anyhow::Result;
use tracing::info;

use crate::{App, Session};

impl<'a> App<'a> {
    /// True when the configured remote exists or was just added. Probed on
    /// every call; nothing is cached between operations.
    pub fn ensure_remote(&mut self, session: &Session) -> Result<bool> {
        let git = self.git(session);
        let remote = git.remote().to_string();

        self.console.info("Checking for a configured remote...");
        if git.has_remote() {
            self.console
                .info(&format!("Remote '{remote}' is configured."));
            return Ok(true);
        }

        self.console
            .info(&format!("No remote named '{remote}' is configured."));
        let url = self.ask(&format!("URL of the remote repository for '{remote}'"))?;
        if url.is_empty() {
            self.console
                .info("No URL provided; the remote was not configured.");
            return Ok(false);
        }

        let added = git.add_remote(&url);
        if added {
            info!(%remote, "remote added");
            self.console.info(&format!("Remote '{remote}' added."));
        }
        Ok(added)
    }
}
