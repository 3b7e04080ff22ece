use crate::error::{AutoTagError, Result};
use crate::git::TagRepository;
use git2::{
    ConfigLevel, Cred, CredentialType, DescribeFormatOptions, DescribeOptions, ErrorCode,
    PushOptions, RemoteCallbacks, Repository as Git2Repo,
};
use std::path::Path;
use tracing::debug;

/// Credential callbacks give up after this many attempts
const MAX_CREDENTIAL_ATTEMPTS: usize = 4;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            AutoTagError::not_a_repository(format!("{}: {}", path.display(), e.message()))
        })?;
        debug!(git_dir = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>> {
        Ok(self.repo.head()?.peel_to_commit()?)
    }
}

impl TagRepository for Git2Repository {
    fn latest_tag(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            Err(e) => {
                debug!(error = %e, "no tag reachable from HEAD");
                return Ok(None);
            }
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        Ok(Some(describe.format(Some(&format))?))
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) if e.code() == ErrorCode::InvalidSpec => Ok(false),
            Err(e) => Err(AutoTagError::tag(format!(
                "Cannot look up tag '{}': {}",
                name, e
            ))),
        }
    }

    fn last_commit_message(&self) -> Result<String> {
        let commit = self.head_commit()?;
        Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
    }

    fn has_config(&self, key: &str) -> Result<bool> {
        let config = self.repo.config()?;
        match config.get_string(key) {
            Ok(value) => Ok(!value.is_empty()),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn set_config(&self, key: &str, value: &str) -> Result<()> {
        let mut local = self.repo.config()?.open_level(ConfigLevel::Local)?;
        local.set_str(key, value)?;
        debug!(key, value, "set repository config");
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.head_commit()?;
        let tagger = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &tagger, message, false)
            .map_err(|e| AutoTagError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        debug!(tag = name, commit = %head.id(), "created annotated tag");
        Ok(())
    }

    fn push_tag(&self, remote_name: &str, name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| AutoTagError::remote(format!("No remote named '{}' found", remote_name)))?;

        let config = self.repo.config()?;
        let mut attempts = 0;

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(|url, username_from_url, allowed_types| {
            attempts += 1;
            if attempts > MAX_CREDENTIAL_ATTEMPTS {
                return Err(git2::Error::from_str("no usable credentials"));
            }
            let username = username_from_url.unwrap_or("git");

            if allowed_types.contains(CredentialType::SSH_KEY) {
                // Agent first, key files on the retry
                if attempts == 1 {
                    if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                        return Ok(cred);
                    }
                }
                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            return Cred::ssh_key(username, None, &path, None);
                        }
                    }
                }
            }

            if allowed_types.contains(CredentialType::USER_PASS_PLAINTEXT) {
                if let Ok(cred) = Cred::credential_helper(&config, url, username_from_url) {
                    return Ok(cred);
                }
            }

            Cred::default()
        });

        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("refs/tags/{0}:refs/tags/{0}", name);
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| {
                if e.class() == git2::ErrorClass::Net {
                    AutoTagError::remote(format!("Network error during push: {}", e))
                } else {
                    AutoTagError::remote(format!("Failed to push tag '{}': {}", name, e))
                }
            })?;

        debug!(tag = name, remote = remote_name, "pushed tag");
        Ok(())
    }
}
