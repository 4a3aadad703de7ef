//! Type token resolution.

use wobject_core::TypeRef;
use wobject_format::TypeToken;

use super::string_table::StringTableBuilder;

/// Resolve `ty` to a token, appending to `strings` for registered types.
///
/// Built-ins encode their id and ignore `override_name`. Registered types
/// append `override_name` when it is non-empty, their display name otherwise,
/// and point at that string.
///
/// # Panics
/// Panics when a registered type has an empty display name.
pub const fn resolve<'a>(
    ty: TypeRef,
    override_name: &'a str,
    strings: &mut StringTableBuilder<'_, 'a>,
) -> TypeToken {
    match ty {
        TypeRef::Builtin(builtin) => TypeToken::builtin(builtin),
        TypeRef::Custom(name) => {
            assert!(
                !name.is_empty(),
                "registered meta type display name must not be empty"
            );
            let name = if override_name.is_empty() {
                name
            } else {
                override_name
            };
            TypeToken::unresolved(strings.append(name))
        }
    }
}
