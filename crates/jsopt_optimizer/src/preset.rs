//! Maps an [`OptLevel`] onto the toggle set consumed by the pipeline.
//!
//! The caller picks the order: exactly one primary preset via
//! [`OptLevel::configure`], then any add-ons. Add-ons overlapping the
//! primary preset's fields must run after it, since later writes win.

use jsopt_log::debug;
use jsopt_middle::options::{
    CheckLevel, DependencyMode, OptimizerOptions, PropertyCollapseLevel, PropertyRenamingPolicy, Reach,
    VariableRenamingPolicy,
};

use crate::OptLevel;

impl OptLevel {
    /// Applies the primary preset for this level. Only the fields named by
    /// the level's routine are written; everything else keeps whatever the
    /// caller put there.
    pub fn configure(self, options: &mut OptimizerOptions) {
        match self {
            OptLevel::Bundle => {}
            OptLevel::WhitespaceOnly => apply_whitespace_only(options),
            OptLevel::Simple => apply_simple(options),
            OptLevel::Advanced => apply_advanced(options),
        }
        debug!(
            "configured {:?}: variable renaming {}, property renaming {}",
            self, options.variable_renaming, options.property_renaming
        );
    }

    /// Enables the optimizations that need type information. Only has an
    /// effect for [`OptLevel::Advanced`]; a no-op for every other level.
    pub fn configure_type_based(self, options: &mut OptimizerOptions) {
        match self {
            OptLevel::Advanced => {
                options.disambiguate_properties = true;
                options.ambiguate_properties = true;
                options.inline_properties = true;
                options.use_types_for_local_optimization = true;
                debug!("type-based optimizations enabled");
            }
            OptLevel::Simple | OptLevel::WhitespaceOnly | OptLevel::Bundle => {}
        }
    }

    /// Enables the optimizations that are only sound when the output is
    /// enclosed by a function wrapper. Advanced mode performs these by
    /// default, so beyond releasing the export reservation this only
    /// affects [`OptLevel::Simple`].
    pub fn configure_wrapped_output(self, options: &mut OptimizerOptions) {
        // Wrapped global names and properties can't conflict.
        options.reserve_raw_exports = false;
        match self {
            OptLevel::Simple => {
                // Global variable optimizations, but not property ones.
                options.variable_renaming = VariableRenamingPolicy::All;
                options.collapse_properties = PropertyCollapseLevel::ModuleExport;
                options.collapse_anonymous_functions = true;
                options.inline_constant_vars = true;
                options.inline_functions = Reach::All;
                options.inline_variables = Reach::All;
                options.remove_unused_variables = Reach::All;
                debug!("wrapped-output globals enabled for {:?}", self);
            }
            OptLevel::Advanced | OptLevel::WhitespaceOnly | OptLevel::Bundle => {}
        }
    }
}

/// Keeps output debuggable regardless of level: minified identifiers get
/// readable pseudo-names and assert calls survive optimization.
pub fn configure_debug(options: &mut OptimizerOptions) {
    options.generate_pseudo_names = true;
    options.remove_library_asserts = false;
    options.remove_transpiled_asserts = false;
    debug!("debug output options enabled");
}

fn apply_whitespace_only(options: &mut OptimizerOptions) {
    options.skip_all_passes = true;
}

/// The safe set: passes that won't break code even when no symbols are
/// exported and no coding convention is followed.
fn apply_simple(options: &mut OptimizerOptions) {
    options.dependency_mode = DependencyMode::SortOnly;

    // Id-generator replacement is on by default but needs whole-program
    // analysis to be sound.
    options.replace_id_generators = false;

    // Not layered on the whitespace-only routine: skip_all_passes cannot
    // be undone once set.
    options.recognize_library_conventions = true;
    options.variable_renaming = VariableRenamingPolicy::Local;
    options.property_renaming = PropertyRenamingPolicy::Off;
    options.inline_variables = Reach::LocalOnly;
    options.inline_functions = Reach::LocalOnly;
    options.assume_closures_capture_only_references = false;
    options.global_this_warning = CheckLevel::Off;
    options.fold_constants = true;
    options.coalesce_variable_names = true;
    options.dead_assignment_elimination = true;
    options.collapse_variable_declarations = true;
    options.convert_to_dotted_properties = true;
    options.label_renaming = true;
    options.remove_unreachable_code = true;
    options.optimize_arguments_array = true;
    options.remove_unused_variables = Reach::LocalOnly;
    options.collapse_object_literals = true;
    options.protect_hidden_side_effects = true;
}

/// The full set: everything in the safe set plus the passes that require
/// all public symbols to be exported correctly.
fn apply_advanced(options: &mut OptimizerOptions) {
    options.dependency_mode = DependencyMode::SortOnly;

    options.check_symbols = true;
    options.check_types = true;

    // The safe optimizations, enumerated rather than shared with
    // apply_simple; the overlap is pinned by test.
    options.recognize_library_conventions = true;
    options.fold_constants = true;
    options.coalesce_variable_names = true;
    options.dead_assignment_elimination = true;
    options.extract_prototype_member_declarations = true;
    options.collapse_variable_declarations = true;
    options.convert_to_dotted_properties = true;
    options.label_renaming = true;
    options.remove_unreachable_code = true;
    options.optimize_arguments_array = true;
    options.collapse_object_literals = true;
    options.protect_hidden_side_effects = true;

    // The advanced optimizations.
    options.remove_library_asserts = true;
    options.remove_abstract_methods = true;
    options.reserve_raw_exports = true;
    options.variable_renaming = VariableRenamingPolicy::All;
    options.property_renaming = PropertyRenamingPolicy::Off;
    options.remove_unused_prototype_properties = true;
    options.remove_unused_class_properties = true;
    options.collapse_anonymous_functions = true;
    options.collapse_properties = PropertyCollapseLevel::All;
    options.global_this_warning = CheckLevel::Warning;
    options.rewrite_function_expressions = false;
    options.smart_name_removal = true;
    options.inline_constant_vars = true;
    options.inline_functions = Reach::All;
    options.assume_closures_capture_only_references = false;
    options.inline_variables = Reach::All;
    options.compute_function_side_effects = true;
    options.assume_strict_this = true;

    // Removing unused vars also removes unused functions.
    options.remove_unused_variables = Reach::All;

    // Move code between output bundles based on declared dependencies.
    options.cross_module_code_motion = true;
    options.cross_module_method_motion = true;

    // Call optimizations.
    options.devirtualize_methods = true;
    options.optimize_calls = true;
    options.optimize_class_constructors = true;
}
