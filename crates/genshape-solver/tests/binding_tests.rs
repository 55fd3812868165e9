use super::*;
use crate::test_fixtures::Library;

#[test]
fn test_empty_binding() {
    let empty = ParameterBinding::EMPTY;
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
    assert!(empty.get("T").is_none());
    assert_eq!(ParameterBinding::default(), empty);
}

#[test]
fn test_binding_lookup_by_name() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string = resolver.descriptor_of(lib.string).expect("String");
    let integer = resolver.descriptor_of(lib.integer).expect("Integer");

    let binding = ParameterBinding::new(
        [Name::from("K"), Name::from("V")],
        [string.clone(), integer.clone()],
    )
    .expect("equal lengths");

    assert_eq!(binding.len(), 2);
    assert_eq!(binding.get("K"), Some(&string));
    assert_eq!(binding.get("V"), Some(&integer));
    assert_eq!(binding.get("T"), None);

    let names: Vec<&str> = binding.iter().map(|(name, _)| &**name).collect();
    assert_eq!(names, vec!["K", "V"]);
}

#[test]
fn test_binding_length_mismatch() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string = resolver.descriptor_of(lib.string).expect("String");

    let err = ParameterBinding::new([Name::from("K"), Name::from("V")], [string]).unwrap_err();
    assert_eq!(
        err,
        ShapeError::InvalidBinding {
            formals: 2,
            actuals: 1,
        }
    );
}

#[test]
fn test_binding_spills_past_inline_capacity() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let string = resolver.descriptor_of(lib.string).expect("String");

    let names: Vec<Name> = (0..BINDING_INLINE_CAPACITY + 2)
        .map(|i| Name::from(format!("P{i}")))
        .collect();
    let shapes = vec![string.clone(); names.len()];
    let binding = ParameterBinding::new(names, shapes).expect("equal lengths");

    assert_eq!(binding.len(), BINDING_INLINE_CAPACITY + 2);
    assert_eq!(binding.get("P5"), Some(&string));
}

#[test]
fn test_binding_for_shape() {
    let lib = Library::new();
    let resolver = lib.resolver();
    let list_of_string = lib.list_of_string(&resolver);

    let binding = ParameterBinding::for_shape(&list_of_string).expect("binding");
    assert_eq!(binding.len(), 1);
    assert_eq!(
        binding.get("E"),
        Some(&resolver.descriptor_of(lib.string).expect("String"))
    );

    let raw_list = resolver.descriptor_of(lib.list).expect("List");
    assert_eq!(
        ParameterBinding::for_shape(&raw_list).expect("binding"),
        ParameterBinding::EMPTY
    );
}
