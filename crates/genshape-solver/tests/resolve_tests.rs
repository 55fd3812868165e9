use super::*;
use crate::test_fixtures::Library;
use genshape_common::{Name, NominalTypeInfo};
use genshape_common::limits::ARRAY_ELEMENT_PARAM;

fn resolve_empty(resolver: &Resolver, expr: &TypeExpr) -> Result<Shape> {
    resolver.resolve(expr, &ParameterBinding::EMPTY)
}

#[test]
fn test_descriptor_of_non_generic() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let first = resolver.descriptor_of(lib.string).expect("String");
    let second = resolver.descriptor_of(lib.string).expect("String");

    assert!(first.actual_parameters().is_empty());
    assert!(first.formal_parameters().is_empty());
    assert_eq!(first, second);
    assert_eq!(first.raw(), lib.string);
    assert_eq!(resolver.cached_nominals(), 1);
}

#[test]
fn test_descriptor_of_unknown_nominal() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let err = resolver.descriptor_of(NominalId(999)).unwrap_err();
    assert_eq!(err, ShapeError::UnknownNominal { id: NominalId(999) });
    assert_eq!(resolver.cached_nominals(), 0);
}

#[test]
fn test_descriptor_of_array_nominal() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string_array = lib.store.array_of(lib.string);

    let shape = resolver.descriptor_of(string_array).expect("String[]");
    let formals: Vec<&str> = shape.formal_parameters().iter().map(|n| &**n).collect();
    assert_eq!(formals, vec![ARRAY_ELEMENT_PARAM]);
    assert_eq!(shape.actual_parameters().len(), 1);
    assert_eq!(
        shape.actual_parameters()[0],
        resolver.descriptor_of(lib.string).expect("String")
    );
    assert_eq!(shape.to_string(), "String[]");
}

#[test]
fn test_nested_array_nominal() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let matrix = lib.store.array_of(lib.store.array_of(lib.integer));

    let shape = resolver.descriptor_of(matrix).expect("Integer[][]");
    assert_eq!(shape.to_string(), "Integer[][]");
    let row = shape.component().expect("component");
    assert_eq!(row.to_string(), "Integer[]");
    assert_eq!(row.component().map(Shape::raw), Some(lib.integer));
}

#[test]
fn test_concrete_and_generic_arrays_are_indistinguishable() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string = resolver.descriptor_of(lib.string).expect("String");

    let named = resolver
        .descriptor_of(lib.store.array_of(lib.string))
        .expect("String[]");

    let binding = ParameterBinding::new([Name::from("T")], [string]).expect("binding");
    let constructed = resolver
        .resolve(&TypeExpr::array(TypeExpr::param("T")), &binding)
        .expect("T[]");

    assert_eq!(named, constructed);
    assert_eq!(named.structural_hash(), constructed.structural_hash());
    assert_eq!(constructed.to_string(), "String[]");
}

#[test]
fn test_generic_instantiation_resolves_each_argument() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string = resolver.descriptor_of(lib.string).expect("String");
    let list_of_string = lib.list_of_string(&resolver);

    let binding = ParameterBinding::new(
        [Name::from("X"), Name::from("Y")],
        [string.clone(), list_of_string.clone()],
    )
    .expect("binding");
    let expr = TypeExpr::generic(lib.map, vec![TypeExpr::param("X"), TypeExpr::param("Y")]);

    let resolved = resolver.resolve(&expr, &binding).expect("Map<X, Y>");
    let expected = resolver
        .shape(lib.map, vec![string, list_of_string])
        .expect("Map<String, List<String>>");

    assert_eq!(resolved, expected);
    assert_eq!(resolved.to_string(), "Map<String, List<String>>");
}

#[test]
fn test_parameter_substitution_replaces() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let list_of_string = lib.list_of_string(&resolver);

    let binding = ParameterBinding::new([Name::from("T")], [list_of_string.clone()])
        .expect("binding");
    let resolved = resolver
        .resolve(&TypeExpr::param("T"), &binding)
        .expect("T");

    // The bound shape comes back as-is, not wrapped in another layer.
    assert_eq!(resolved, list_of_string);
    assert_eq!(resolved.raw(), lib.list);
}

#[test]
fn test_unbound_parameter() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let err = resolve_empty(
        &resolver,
        &TypeExpr::generic(lib.list, vec![TypeExpr::param("T")]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ShapeError::UnboundParameter {
            name: Name::from("T")
        }
    );
}

#[test]
fn test_wildcard_is_unsupported() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let wildcard = TypeExpr::Wildcard {
        upper: Some(Box::new(lib.string.into())),
    };
    let err = resolve_empty(&resolver, &TypeExpr::generic(lib.list, vec![wildcard])).unwrap_err();
    assert_eq!(err, ShapeError::UnsupportedExpression { kind: "wildcard" });
}

#[test]
fn test_generic_arity_mismatch() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let err = resolve_empty(
        &resolver,
        &TypeExpr::generic(lib.map, vec![lib.string.into()]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ShapeError::ArityMismatch {
            shape: Name::from("Map"),
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn test_generic_with_no_args_is_raw() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let raw = resolve_empty(&resolver, &TypeExpr::generic(lib.map, vec![])).expect("raw Map");
    assert!(raw.is_raw());
    assert_eq!(raw, resolver.descriptor_of(lib.map).expect("Map"));
}

#[test]
fn test_array_generic_with_no_args_is_descriptor() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string_array = lib.store.array_of(lib.string);

    let bare = resolve_empty(&resolver, &TypeExpr::generic(string_array, vec![]))
        .expect("String[]");
    assert_eq!(bare, resolver.descriptor_of(string_array).expect("String[]"));
    assert_eq!(bare.to_string(), "String[]");

    let built = resolver.shape(string_array, Vec::new()).expect("String[]");
    assert_eq!(built, bare);
}

#[test]
fn test_array_shape_follows_its_element() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string_array = lib.store.array_of(lib.string);
    let integer = resolver.descriptor_of(lib.integer).expect("Integer");

    let shape = resolver
        .shape(string_array, vec![integer.clone()])
        .expect("Integer[]");
    assert_eq!(shape.raw(), lib.store.array_of(lib.integer));
    assert_eq!(shape.to_string(), "Integer[]");
    assert_eq!(shape, resolver.array_of(integer.clone()));

    let via_expr = resolve_empty(
        &resolver,
        &TypeExpr::generic(string_array, vec![lib.integer.into()]),
    )
    .expect("Integer[]");
    assert_eq!(via_expr, shape);

    let err = resolver
        .shape(string_array, vec![integer.clone(), integer])
        .unwrap_err();
    assert_eq!(
        err,
        ShapeError::ArityMismatch {
            shape: Name::from("String[]"),
            expected: 1,
            actual: 2,
        }
    );
}

#[test]
fn test_generic_over_unknown_nominal() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let err = resolve_empty(&resolver, &TypeExpr::generic(NominalId(999), vec![])).unwrap_err();
    assert_eq!(err, ShapeError::UnknownNominal { id: NominalId(999) });
}

#[test]
fn test_array_of_generic_component() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let list_of_string = lib.list_of_string(&resolver);

    let binding = ParameterBinding::new([Name::from("E")], [resolver
        .descriptor_of(lib.string)
        .expect("String")])
    .expect("binding");
    let resolved = resolver
        .resolve(
            &TypeExpr::array(TypeExpr::generic(lib.list, vec![TypeExpr::param("E")])),
            &binding,
        )
        .expect("List<E>[]");

    assert_eq!(resolved.component(), Some(&list_of_string));
    assert_eq!(resolved.to_string(), "List<String>[]");
    assert_eq!(resolved, resolver.array_of(list_of_string));
}

#[test]
fn test_resolution_is_deterministic_across_resolvers() {
    let lib = Library::new();
    let expr = TypeExpr::generic(
        lib.map,
        vec![
            lib.string.into(),
            TypeExpr::array(TypeExpr::generic(lib.list, vec![lib.integer.into()])),
        ],
    );

    let a = resolve_empty(&lib.resolver(), &expr).expect("first");
    let b = resolve_empty(&lib.resolver(), &expr).expect("second");
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "Map<String, List<Integer>[]>");
}

#[test]
fn test_resolve_all_preserves_order() {
    let lib = Library::new();
    let resolver = lib.resolver();

    let shapes = resolver
        .resolve_all(
            &[lib.integer.into(), lib.string.into(), lib.object.into()],
            &ParameterBinding::EMPTY,
        )
        .expect("all resolve");
    let names: Vec<String> = shapes.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["Integer", "String", "Object"]);
}
