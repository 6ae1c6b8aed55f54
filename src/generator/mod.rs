// Generator module - renders force-delete scripts and the context-menu registry file

pub mod batch;
pub mod powershell;
pub mod registry;

use crate::models::{Artifact, ArtifactKind, GenerationRequest, ScriptVariant};

/// Well-known SID of the local Administrators group. Unlike the group name it
/// does not change with the Windows display language.
pub const ADMINISTRATORS_SID: &str = "*S-1-5-32-544";

pub const REGISTRY_FILE_NAME: &str = "AddContextMenu.reg";

/// Answer passed to `takeown /D` for subfolders that cannot be listed.
///
/// takeown compares it against the localized "yes" letter, so on non-English
/// Windows (German expects `J`) the recursive step stops at such folders. The
/// following `icacls /T /C` pass still continues past them.
pub const TAKEOWN_DEFAULT_ANSWER: &str = "Y";

/// Every generated artifact targets Windows tools, so lines end in CRLF.
pub(crate) const LINE_ENDING: &str = "\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    TakeOwnership,
    GrantPermissions,
    Remove,
}

impl Step {
    /// Execution order shared by every dialect.
    pub const ORDERED: [Step; 3] = [Step::TakeOwnership, Step::GrantPermissions, Step::Remove];

    pub fn description(&self) -> &'static str {
        match self {
            Step::TakeOwnership => "take ownership",
            Step::GrantPermissions => "grant full control to Administrators",
            Step::Remove => "force delete",
        }
    }
}

/// Drops trailing `\` and `/` from `path`, except for roots such as `C:\`.
///
/// Scripts quote the target as `"C:\dir\"` when calling takeown and icacls.
/// Those tools split their command line with the CRT rules, where `\"` is an
/// escaped quote, so a trailing separator would swallow the closing quote and
/// every following argument.
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['\\', '/']);
    let is_root = trimmed.is_empty() || (trimmed.len() == 2 && trimmed.ends_with(':'));
    if is_root {
        path
    } else {
        trimmed
    }
}

pub fn generate_script(path: &str, variant: ScriptVariant) -> String {
    match variant {
        ScriptVariant::PowerShell => powershell::render(path),
        ScriptVariant::Batch => batch::render(path),
    }
}

pub fn generate_registry_file(path: &str) -> String {
    registry::render(path)
}

pub fn script_artifact(request: &GenerationRequest) -> Artifact {
    Artifact {
        file_name: request.variant.file_name(),
        content: request.script(),
        kind: ArtifactKind::Script(request.variant),
    }
}

pub fn registry_artifact(request: &GenerationRequest) -> Artifact {
    Artifact {
        file_name: REGISTRY_FILE_NAME,
        content: request.registry_file(),
        kind: ArtifactKind::Registry,
    }
}

pub(crate) fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push_str(LINE_ENDING);
    }
    out
}
