//! Alias directory service: resolve, search, register and remove.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::application::gate::WriterPreferenceGate;
use crate::domain::entities::Mapping;
use crate::domain::store::{OrderedKeyStore, ScanRange};
use crate::error::AppError;
use crate::utils::alias_synthesizer::default_alias;
use crate::utils::alias_validator::{require_alias, validate_alias};
use crate::utils::target_validator::validate_target;

/// Service orchestrating every directory operation.
///
/// Each operation takes exactly one ticket from the [`WriterPreferenceGate`]:
/// a read ticket for [`Self::resolve`], [`Self::search`] and [`Self::count`],
/// a write ticket for [`Self::register`] and [`Self::remove`]. Input checks
/// that need no directory state run before the ticket is requested.
pub struct DirectoryService<S: OrderedKeyStore> {
    gate: Arc<WriterPreferenceGate<S>>,
}

impl<S: OrderedKeyStore> DirectoryService<S> {
    /// Creates a service operating on the directory behind `gate`.
    pub fn new(gate: Arc<WriterPreferenceGate<S>>) -> Self {
        Self { gate }
    }

    /// Returns the target registered under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty and
    /// [`AppError::NotFound`] if it is not registered.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        require_alias(alias)?;

        let directory = self.gate.acquire_read().await;
        let target = directory.lookup(alias);
        drop(directory);

        metrics::counter!("directory_resolves_total").increment(1);

        target.ok_or_else(|| {
            debug!(alias, "alias not found");
            AppError::not_found(
                format!("alias \"{alias}\" doesn't exist"),
                json!({ "alias": alias }),
            )
        })
    }

    /// Lists every mapping whose alias starts with `prefix`, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `prefix` is empty.
    pub async fn search(&self, prefix: &str) -> Result<Vec<Mapping>, AppError> {
        if prefix.is_empty() {
            return Err(AppError::bad_request("prefix is required", json!({})));
        }

        let range = ScanRange::for_prefix(prefix);

        let directory = self.gate.acquire_read().await;
        let entries = directory.range_ascending(&range);
        drop(directory);

        debug_assert!(entries.iter().all(|(alias, _)| range.contains(alias)));

        debug!(prefix, matches = entries.len(), "prefix search");
        metrics::counter!("directory_searches_total").increment(1);

        Ok(entries.into_iter().map(Mapping::from).collect())
    }

    /// Registers `target` under `alias`, or under a synthesized alias when
    /// `alias` is `None`.
    ///
    /// A synthesized alias is the successor of the directory's greatest alias,
    /// read under the same write ticket that performs the insert. The alias
    /// rules (`[a-z]`, at most 64 characters) apply to caller-supplied aliases
    /// only: once the greatest alias is all `'z'`, the successor grows by one
    /// character and may exceed the length cap.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the target is not an absolute
    /// HTTP(S) URL or the alias breaks the alias rules.
    ///
    /// Returns [`AppError::Conflict`] if the alias is already registered; the
    /// existing mapping is left untouched.
    pub async fn register(
        &self,
        alias: Option<String>,
        target: String,
    ) -> Result<Mapping, AppError> {
        validate_target(&target).map_err(|e| {
            AppError::bad_request("wrong URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(alias) = &alias {
            validate_alias(alias)?;
        }

        let mut directory = self.gate.acquire_write().await;

        let alias = match alias {
            Some(alias) => alias,
            None => {
                let maximum = directory.maximum().map(|(key, _)| key);
                default_alias(maximum.as_deref())
            }
        };

        if directory.insert_if_absent(&alias, &target).is_err() {
            drop(directory);
            warn!(alias = %alias, "alias already taken");
            return Err(AppError::conflict(
                format!("alias \"{alias}\" is already taken"),
                json!({ "alias": alias }),
            ));
        }
        drop(directory);

        info!(alias = %alias, target = %target, "alias registered");
        metrics::counter!("directory_registrations_total").increment(1);

        Ok(Mapping { alias, target })
    }

    /// Removes the mapping registered under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    ///
    /// Returns [`AppError::Conflict`] if the alias is not registered: removal
    /// of an alias that is already gone is reported as a conflicting request
    /// rather than a missing resource.
    pub async fn remove(&self, alias: &str) -> Result<(), AppError> {
        require_alias(alias)?;

        let mut directory = self.gate.acquire_write().await;
        let removed = directory.delete_if_present(alias);
        drop(directory);

        if removed.is_err() {
            debug!(alias, "remove of missing alias");
            return Err(AppError::conflict(
                format!("alias \"{alias}\" already doesn't exist"),
                json!({ "alias": alias }),
            ));
        }

        info!(alias, "alias removed");
        metrics::counter!("directory_removals_total").increment(1);

        Ok(())
    }

    /// Number of registered aliases.
    pub async fn count(&self) -> usize {
        self.gate.acquire_read().await.entry_count()
    }

    /// Writes admitted by the gate but not yet finished.
    pub fn pending_writes(&self) -> usize {
        self.gate.pending_writes()
    }
}
