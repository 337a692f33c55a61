use derive_more::Display;

#[cfg(feature = "format")]
use serde::{Deserialize, Serialize};

/// How far a variable or function definition may be substituted at its use
/// sites.
#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Reach {
    #[default]
    None,
    LocalOnly,
    All,
}

/// Breadth over which identifiers may be replaced with shorter names.
#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum VariableRenamingPolicy {
    #[default]
    Off,
    /// Only identifiers local to a function body.
    Local,
    All,
}

#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PropertyRenamingPolicy {
    #[default]
    Off,
    /// Rename every unquoted property that is not declared in an
    /// external-API manifest.
    AllUnquoted,
}

/// How aggressively dotted access chains are flattened into single
/// identifiers (`a.b` -> `a$b`).
#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum PropertyCollapseLevel {
    #[default]
    None,
    /// Only names crossing an exported module boundary.
    ModuleExport,
    All,
}

/// Severity attached to a diagnostic category.
#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum CheckLevel {
    #[default]
    Off,
    Warning,
    Error,
}

/// What the dependency sorter is allowed to do with the input file graph.
#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum DependencyMode {
    #[default]
    None,
    /// Order files by their declared dependencies, keep everything.
    SortOnly,
    /// Order files and drop those nothing depends on.
    Prune,
}

/// The capability toggles consumed by the transformation pipeline.
///
/// Owned by the caller and handed to each pipeline stage by reference.
/// Every field is independent: writing one never implicitly changes
/// another, so preset code can assign them in any order. Presets and
/// add-ons (see `jsopt_optimizer`) only ever write fields; defaults for
/// anything they leave alone are the caller's business.
#[cfg_attr(feature = "format", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizerOptions {
    // Structural
    /// Skip every transformation pass; only whitespace and comment
    /// stripping remain active downstream.
    pub skip_all_passes: bool,
    pub dependency_mode: DependencyMode,

    // Checks
    pub check_symbols: bool,
    pub check_types: bool,
    /// Severity of the "global `this` outside a method" diagnostic.
    pub global_this_warning: CheckLevel,

    // Conventions
    /// Recognize provide/require-style library conventions in the input.
    pub recognize_library_conventions: bool,
    /// Replace id-generator calls with stable ids. Unsafe without
    /// whole-program analysis.
    pub replace_id_generators: bool,

    // Renaming
    pub variable_renaming: VariableRenamingPolicy,
    pub property_renaming: PropertyRenamingPolicy,
    pub label_renaming: bool,
    /// Emit human-readable pseudo-names instead of minified ones.
    pub generate_pseudo_names: bool,

    // Inlining
    pub inline_variables: Reach,
    pub inline_functions: Reach,
    pub inline_constant_vars: bool,
    /// Inline property reads using type information.
    pub inline_properties: bool,
    pub assume_closures_capture_only_references: bool,

    // Dead code elimination
    pub fold_constants: bool,
    pub coalesce_variable_names: bool,
    pub dead_assignment_elimination: bool,
    pub remove_unreachable_code: bool,
    pub remove_unused_variables: Reach,
    /// Also inlines getters on the properties it keeps.
    pub remove_unused_prototype_properties: bool,
    pub remove_unused_class_properties: bool,
    /// Remove unused names even when they look referenced from prototypes.
    pub smart_name_removal: bool,
    /// Remove variables assigned an abstract-method placeholder.
    pub remove_abstract_methods: bool,
    /// Strip assert calls from the supported component library.
    pub remove_library_asserts: bool,
    /// Strip assert calls emitted by source-to-JS transpilers.
    pub remove_transpiled_asserts: bool,

    // Collapsing and structure
    pub collapse_variable_declarations: bool,
    pub collapse_object_literals: bool,
    /// Rewrite `var f = function() {}` to a function declaration.
    pub collapse_anonymous_functions: bool,
    pub collapse_properties: PropertyCollapseLevel,
    /// Rewrite `a["b"]` as `a.b` where the key permits it.
    pub convert_to_dotted_properties: bool,
    pub extract_prototype_member_declarations: bool,
    pub rewrite_function_expressions: bool,
    /// Optimize away reads of the `arguments` array.
    pub optimize_arguments_array: bool,

    // Cross-module motion
    pub cross_module_code_motion: bool,
    pub cross_module_method_motion: bool,

    // Call optimization
    /// Turn dispatch-based method calls into direct calls where the
    /// receiver is statically known.
    pub devirtualize_methods: bool,
    /// Drop unused arguments and return values; runs a further
    /// unused-code removal on what that exposes.
    pub optimize_calls: bool,
    /// Elide explicit class constructors that do nothing.
    pub optimize_class_constructors: bool,

    // Type-based optimization
    pub disambiguate_properties: bool,
    pub ambiguate_properties: bool,
    pub use_types_for_local_optimization: bool,

    // Side effects
    /// Mark functions the analysis proves pure.
    pub compute_function_side_effects: bool,
    /// Keep expression results that look discarded but may be observed.
    pub protect_hidden_side_effects: bool,
    pub assume_strict_this: bool,

    // Exports
    /// Keep publicly declared interface names untouched so external code
    /// referencing them stays valid.
    pub reserve_raw_exports: bool,
}

impl OptimizerOptions {
    pub fn new() -> Self {
        OptimizerOptions::default()
    }
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            skip_all_passes: false,
            dependency_mode: DependencyMode::None,
            check_symbols: false,
            check_types: false,
            global_this_warning: CheckLevel::Off,
            recognize_library_conventions: false,
            // On by default; only presets that cannot do whole-program
            // analysis switch it off.
            replace_id_generators: true,
            variable_renaming: VariableRenamingPolicy::Off,
            property_renaming: PropertyRenamingPolicy::Off,
            label_renaming: false,
            generate_pseudo_names: false,
            inline_variables: Reach::None,
            inline_functions: Reach::None,
            inline_constant_vars: false,
            inline_properties: false,
            assume_closures_capture_only_references: false,
            fold_constants: false,
            coalesce_variable_names: false,
            dead_assignment_elimination: false,
            remove_unreachable_code: false,
            remove_unused_variables: Reach::None,
            remove_unused_prototype_properties: false,
            remove_unused_class_properties: false,
            smart_name_removal: false,
            remove_abstract_methods: false,
            remove_library_asserts: false,
            remove_transpiled_asserts: false,
            collapse_variable_declarations: false,
            collapse_object_literals: false,
            collapse_anonymous_functions: false,
            collapse_properties: PropertyCollapseLevel::None,
            convert_to_dotted_properties: false,
            extract_prototype_member_declarations: false,
            rewrite_function_expressions: false,
            optimize_arguments_array: false,
            cross_module_code_motion: false,
            cross_module_method_motion: false,
            devirtualize_methods: false,
            optimize_calls: false,
            optimize_class_constructors: false,
            disambiguate_properties: false,
            ambiguate_properties: false,
            use_types_for_local_optimization: false,
            compute_function_side_effects: false,
            protect_hidden_side_effects: false,
            assume_strict_this: false,
            reserve_raw_exports: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_has_everything_off_except_id_generators() {
        let options = OptimizerOptions::new();
        assert!(options.replace_id_generators);

        let mut everything_off = options.clone();
        everything_off.replace_id_generators = false;
        // Spot-check the enum-valued knobs; bools are covered by the
        // whole-record comparisons in the preset tests.
        assert_eq!(everything_off.dependency_mode, DependencyMode::None);
        assert_eq!(everything_off.variable_renaming, VariableRenamingPolicy::Off);
        assert_eq!(everything_off.property_renaming, PropertyRenamingPolicy::Off);
        assert_eq!(everything_off.inline_variables, Reach::None);
        assert_eq!(everything_off.inline_functions, Reach::None);
        assert_eq!(everything_off.remove_unused_variables, Reach::None);
        assert_eq!(everything_off.collapse_properties, PropertyCollapseLevel::None);
        assert_eq!(everything_off.global_this_warning, CheckLevel::Off);
        assert!(!everything_off.skip_all_passes);
        assert!(!everything_off.reserve_raw_exports);
    }

    #[test]
    fn policy_enums_render_their_variant_names() {
        assert_eq!(VariableRenamingPolicy::Local.to_string(), "Local");
        assert_eq!(Reach::LocalOnly.to_string(), "LocalOnly");
        assert_eq!(PropertyCollapseLevel::ModuleExport.to_string(), "ModuleExport");
    }
}
