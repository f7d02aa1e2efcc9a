//! The greeting text and the environment lookup that feeds it.

use std::env::VarError;

use tracing::warn;

use crate::config::{DEFAULT_ENVIRONMENT, ENV_VAR};
use crate::env::ReadEnv;

/// Fixed part of the greeting; the environment name is appended.
pub const GREETING_PREFIX: &str = "Hello Successfully implemented the project by setting up a \
CI/CD pipeline, containerizing the application using Docker, deploying it on AWS \
(ECS/Fargate) from ECS Fargate! Environment: ";

/// Build the greeting for `environment`.
pub fn render_greeting(environment: &str) -> String {
    let mut body = String::with_capacity(GREETING_PREFIX.len() + environment.len());
    body.push_str(GREETING_PREFIX);
    body.push_str(environment);
    body
}

/// Current value of `ENV`, or `dev` when it is unset.
///
/// A set-but-empty value is returned as is. A value that is not valid
/// Unicode is treated as unset.
pub fn resolve_environment<E: ReadEnv + ?Sized>(env: &E) -> String {
    match env.var(ENV_VAR) {
        Ok(value) => value,
        Err(VarError::NotPresent) => DEFAULT_ENVIRONMENT.to_string(),
        Err(VarError::NotUnicode(raw)) => {
            warn!(
                value = ?raw,
                "{} is not valid unicode, using {:?}", ENV_VAR, DEFAULT_ENVIRONMENT
            );
            DEFAULT_ENVIRONMENT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::InMemoryEnv;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_full_sentence() {
        assert_eq!(
            render_greeting("dev"),
            "Hello Successfully implemented the project by setting up a CI/CD pipeline, \
             containerizing the application using Docker, deploying it on AWS (ECS/Fargate) \
             from ECS Fargate! Environment: dev"
        );
    }

    #[test]
    fn unset_env_defaults_to_dev() {
        assert_eq!(resolve_environment(&InMemoryEnv::new()), "dev");
    }

    #[test]
    fn set_env_is_used_verbatim() {
        let env = InMemoryEnv::new().with("ENV", "prod");
        assert_eq!(resolve_environment(&env), "prod");
    }

    #[test]
    fn empty_env_is_not_replaced() {
        let env = InMemoryEnv::new().with("ENV", "");
        assert_eq!(resolve_environment(&env), "");
        assert!(render_greeting("").ends_with("Environment: "));
    }

    #[test]
    fn non_unicode_env_falls_back() {
        struct Garbled;

        impl ReadEnv for Garbled {
            fn var(&self, _key: &str) -> Result<String, VarError> {
                Err(VarError::NotUnicode("\u{fffd}".into()))
            }
        }

        assert_eq!(resolve_environment(&Garbled), "dev");
    }
}
