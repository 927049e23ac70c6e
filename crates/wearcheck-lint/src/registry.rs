//! Rule registry for managing validation rules.

use crate::engine::build_notes;
use crate::report::{aggregate_overall, RuleCategory, RuleResult, ValidationReport};
use crate::rules::{all_rules, RuleContext, ValidationRule};
use std::collections::HashSet;
use wearcheck_spec::{resolve_budget, ModelStats, UserSelection};

/// Ordered set of validation rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule>>,
    disabled_rules: HashSet<String>,
    enabled_only: Option<HashSet<String>>,
}

impl RuleRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled_rules: HashSet::new(),
            enabled_only: None,
        }
    }

    /// Creates a registry with the full rule battery registered.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        for rule in all_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Registers a rule after the existing ones.
    pub fn register(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Disables a rule by ID.
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.disabled_rules.insert(rule_id.to_string());
    }

    /// Enables only the specified rules (disables all others).
    pub fn enable_only(&mut self, rule_ids: &[&str]) {
        self.enabled_only = Some(rule_ids.iter().map(|s| s.to_string()).collect());
    }

    /// Returns all registered rules.
    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }

    /// Returns rule metadata for documentation/introspection.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        self.rules
            .iter()
            .map(|r| RuleMetadata {
                id: r.id().to_string(),
                category: r.category(),
                description: r.description().to_string(),
            })
            .collect()
    }

    /// Returns true if a rule with this ID is registered.
    pub fn contains(&self, rule_id: &str) -> bool {
        self.rules.iter().any(|r| r.id() == rule_id)
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn is_rule_enabled(&self, rule_id: &str) -> bool {
        if self.disabled_rules.contains(rule_id) {
            return false;
        }
        if let Some(ref enabled) = self.enabled_only {
            return enabled.contains(rule_id);
        }
        true
    }

    /// Evaluates every enabled, applicable rule in registration order.
    pub fn evaluate(&self, ctx: &RuleContext) -> Vec<RuleResult> {
        let mut results = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !self.is_rule_enabled(rule.id()) {
                continue;
            }

            if !rule.applies(ctx) {
                tracing::debug!(rule = rule.id(), "rule does not apply, skipping");
                continue;
            }

            let result = rule.evaluate(ctx);
            tracing::debug!(rule = rule.id(), result = %result.result, "evaluated rule");
            results.push(result);
        }
        results
    }

    /// Validates a model against the budget resolved from `selection`.
    pub fn validate(
        &self,
        stats: &ModelStats,
        selection: &UserSelection,
        file_name: &str,
    ) -> ValidationReport {
        let budget = resolve_budget(selection);
        let results = self.evaluate(&RuleContext::new(stats, &budget));
        let overall = aggregate_overall(&results);

        tracing::debug!(
            file_name,
            target_slot = %budget.target_slot,
            overall = %overall,
            "validation complete"
        );

        ValidationReport {
            overall,
            target_slot: budget.target_slot,
            applied_triangle_budget: budget.triangles,
            max_materials: budget.max_materials,
            max_textures: budget.max_textures,
            results,
            notes: build_notes(selection),
            file_name: file_name.to_string(),
            model_stats: stats.clone(),
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Metadata about a validation rule for documentation/introspection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RuleMetadata {
    /// Rule identifier.
    pub id: String,
    /// Report grouping.
    pub category: RuleCategory,
    /// Human-readable description.
    pub description: String,
}
