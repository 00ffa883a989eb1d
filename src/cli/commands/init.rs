//! Write a default configuration file

use std::fs;
use std::path::Path;

use qa_verify::config::LOCAL_CONFIG_FILE;
use qa_verify::output::OutputMode;

const DEFAULT_CONFIG: &str = r#"# qa-verify configuration

[reviews]
# Count approving reviews (and changes-requested reviews) like /lgtm comments
acts_as_approval = false

# Per-org and per-repo overrides; a repo entry wins over its org entry
# [reviews.orgs]
# openshift = true
# [reviews.repos]
# "openshift/origin" = false

[links]
# Ticket links with this tracker URL point at review threads
host = "https://github.com/"

[transition]
# Move approved tickets to `status` (off: only report the verdict)
enabled = false
status = "VERIFIED"

[commands]
keyword = "lgtm"
qualifiers = ["no-issue"]
announcement = "Requesting review from QA contact:"
"#;

/// Write `qa-verify.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(LOCAL_CONFIG_FILE);

    if path.exists() && !force {
        if mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "created": false, "path": LOCAL_CONFIG_FILE }));
        } else {
            println!("Already initialized ({LOCAL_CONFIG_FILE} exists).");
            println!("Use --force to overwrite.");
        }
        return Ok(());
    }

    fs::write(path, DEFAULT_CONFIG)?;
    log::debug!("Wrote {}", path.display());

    if mode == OutputMode::Json {
        println!("{}", serde_json::json!({ "created": true, "path": LOCAL_CONFIG_FILE }));
    } else {
        println!("Created {LOCAL_CONFIG_FILE}");
    }
    Ok(())
}
