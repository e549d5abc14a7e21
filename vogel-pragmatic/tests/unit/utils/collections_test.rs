use super::*;

#[test]
fn can_combine_error_results() {
    let results: Vec<Result<(), String>> = vec![Ok(()), Err("first".to_string()), Ok(()), Err("second".to_string())];

    let result = combine_error_results(results.as_slice());

    assert_eq!(result, Err(vec!["first".to_string(), "second".to_string()]));
}

#[test]
fn can_combine_ok_results() {
    let results: Vec<Result<(), String>> = vec![Ok(()), Ok(())];

    assert_eq!(combine_error_results(results.as_slice()), Ok(()));
}

parameterized_test! {can_get_duplicates, (items, expected), {
    can_get_duplicates_impl(items, expected);
}}

can_get_duplicates! {
    case01: (vec!["a", "b", "c"], None),
    case02: (vec!["a", "b", "a"], Some(vec!["a"])),
    case03: (vec!["a", "a", "a", "b", "b"], Some(vec!["a", "b"])),
    case04: (Vec::<&str>::new(), None),
}

fn can_get_duplicates_impl(items: Vec<&str>, expected: Option<Vec<&str>>) {
    let items = items.into_iter().map(|item| item.to_string()).collect::<Vec<_>>();

    let duplicates = get_duplicates(items.iter()).map(|ids| ids.into_iter().map(|id| id.as_str()).collect::<Vec<_>>());

    assert_eq!(duplicates, expected);
}
