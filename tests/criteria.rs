use common::query_of;
use restcriteria::prelude::*;

mod common;

#[test]
fn test_spec_round_trip() -> restcriteria::Result<()> {
    let criteria = ApplicationCriteria::new()
        .order_by_name()
        .offset_by(10)?
        .limit_to(25)?
        .expand_accounts_paged(5, 0)?;

    assert_eq!(
        query_of(&criteria),
        "orderBy=name&offset=10&limit=25&expand=accounts(offset:0,limit:5)"
    );
    Ok(())
}

#[test]
fn test_reordering_moves_attribute_to_end() -> restcriteria::Result<()> {
    let criteria = ApplicationCriteria::new()
        .order_by("name")?
        .order_by("status")?
        .order_by_dir("name", false)?;

    assert_eq!(query_of(&criteria), "orderBy=status,name,desc");
    Ok(())
}

#[test]
fn test_named_orderings_follow_same_rule() {
    let criteria = AccountCriteria::new()
        .order_by_surname()
        .order_by_given_name()
        .order_by_surname_desc();

    let attributes: Vec<(&str, bool)> = criteria
        .core()
        .orderings()
        .iter()
        .map(|k| (k.attribute(), k.direction().is_ascending()))
        .collect();
    assert_eq!(attributes, [("givenName", true), ("surname", false)]);
    assert_eq!(query_of(&criteria), "orderBy=givenName,surname,desc");
}

#[test]
fn test_limit_bounds() {
    assert!(matches!(
        GroupCriteria::new().limit_to(0),
        Err(CriteriaError::InvalidArgument { name: "limit", value: 0, .. })
    ));
    assert!(matches!(
        GroupCriteria::new().limit_to(-1),
        Err(CriteriaError::InvalidArgument { name: "limit", value: -1, .. })
    ));

    let criteria = GroupCriteria::new().limit_to(1).unwrap();
    assert_eq!(criteria.core().limit(), Some(1));
}

#[test]
fn test_offset_bounds() {
    let err = DirectoryCriteria::new().offset_by(-1).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "Invalid argument: offset must be a non-negative integer, got -1"
    );

    let criteria = DirectoryCriteria::new().offset_by(0).unwrap();
    assert_eq!(query_of(&criteria), "offset=0");
}

#[test]
fn test_pagination_last_write_wins() -> restcriteria::Result<()> {
    let criteria = TenantCriteria::new()
        .limit_to(100)?
        .offset_by(5)?
        .limit_to(10)?
        .offset_by(0)?;

    assert_eq!(query_of(&criteria), "offset=0&limit=10");
    Ok(())
}

#[test]
fn test_filters_and_search() -> restcriteria::Result<()> {
    let criteria = AccountCriteria::new()
        .where_email(FilterValue::ends_with("@example.com"))
        .where_status(Status::Enabled)
        .search("jean luc")
        .filter("customData.team", "blue")?
        .where_email(FilterValue::starts_with("jl"));

    assert_eq!(
        query_of(&criteria),
        "email=jl*&status=ENABLED&q=jean%20luc&customData.team=blue"
    );
    Ok(())
}

#[test]
fn test_generic_entry_points_reject_empty_names() {
    assert_eq!(
        ApplicationCriteria::new().order_by("").unwrap_err(),
        CriteriaError::EmptyName("attribute name")
    );
    assert_eq!(
        ApplicationCriteria::new().filter("", "x").unwrap_err(),
        CriteriaError::EmptyName("filter key")
    );
    assert_eq!(
        ApplicationCriteria::new().expand("").unwrap_err(),
        CriteriaError::EmptyName("property name")
    );
}

#[test]
fn test_names_cannot_forge_query_structure() {
    // would otherwise serialize as orderBy=name,desc
    assert!(matches!(
        ApplicationCriteria::new().order_by("name,desc"),
        Err(CriteriaError::InvalidName { kind: "attribute name", .. })
    ));
    assert!(ApplicationCriteria::new().order_by_dir("status:x", false).is_err());
    assert!(matches!(
        ApplicationCriteria::new().expand("accounts(offset:0,limit:5)"),
        Err(CriteriaError::InvalidName { kind: "property name", .. })
    ));

    for key in ["orderBy", "offset", "limit", "expand"] {
        let err = ApplicationCriteria::new().filter(key, "5").unwrap_err();
        assert!(err.is_invalid_argument(), "{key} accepted as a filter key");
    }
}

#[test]
fn test_trace_resource_matches_options() {
    assert_eq!(ApplicationOptions::RESOURCE, "Application");
    assert_eq!(
        <<ApplicationCriteria as ResourceCriteria>::Options as ResourceOptions>::RESOURCE,
        ApplicationOptions::RESOURCE
    );
    assert_eq!(ApplicationCriteria::PATH, "/applications");
}

#[test]
fn test_full_query_parameter_order() -> restcriteria::Result<()> {
    let criteria = GroupCriteria::new()
        .expand_tenant()
        .limit_to(50)?
        .expand_accounts_limited(10)?
        .order_by_description_desc()
        .offset_by(100)?
        .where_name(FilterValue::contains("admin"))
        .expand_directory();

    let params = criteria.to_query_params();
    let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        ["name", "orderBy", "offset", "limit", "expand", "expand", "expand"]
    );

    assert_eq!(
        query_of(&criteria),
        "name=*admin*&orderBy=description,desc&offset=100&limit=50\
         &expand=accounts(limit:10)&expand=directory&expand=tenant"
    );
    Ok(())
}

#[test]
fn test_options_accessors() -> restcriteria::Result<()> {
    let mut criteria = GroupCriteria::new().expand_account_memberships_paged(5, 5)?;

    criteria.options_mut().core_mut().expand("tenant")?;
    assert_eq!(criteria.options().core().len(), 2);

    let directive = criteria.options().core().get("accountMemberships").cloned();
    assert_eq!(
        directive,
        Some(ExpansionDirective::paged("accountMemberships", 5, 5)?)
    );
    Ok(())
}

#[test]
fn test_criteria_from_options() -> restcriteria::Result<()> {
    let options = ApplicationOptions::new().expand_tenant().expand_groups_limited(3)?;
    let criteria = ApplicationCriteria::from(options).order_by_status_desc();

    assert_eq!(
        query_of(&criteria),
        "orderBy=status,desc&expand=groups(limit:3)&expand=tenant"
    );
    Ok(())
}

#[test]
fn test_empty_criteria_serializes_to_nothing() {
    let params = GroupMembershipCriteria::new().to_query_params();
    assert!(params.is_empty());
    assert_eq!(params.append_to("/groupMemberships"), "/groupMemberships");
}
