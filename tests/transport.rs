use common::{FailingTransport, Recorded, RecordingTransport, TransportFailure};
use restcriteria::prelude::*;

mod common;

#[test]
fn test_execute_hands_query_to_transport() -> restcriteria::Result<()> {
    let transport = RecordingTransport::default();

    let url = GroupCriteria::new()
        .where_status(Status::Disabled)
        .order_by_name()
        .limit_to(5)?
        .execute(&transport)
        .unwrap();

    assert_eq!(url, "/groups?status=DISABLED&orderBy=name&limit=5");
    assert_eq!(
        transport.requests.borrow().as_slice(),
        [Recorded {
            path: "/groups".to_owned(),
            query: "status=DISABLED&orderBy=name&limit=5".to_owned(),
        }]
    );
    Ok(())
}

#[test]
fn test_each_resource_targets_its_collection() {
    let transport = RecordingTransport::default();

    AccountCriteria::new().execute(&transport).unwrap();
    ApplicationCriteria::new().execute(&transport).unwrap();
    DirectoryCriteria::new().execute(&transport).unwrap();
    GroupCriteria::new().execute(&transport).unwrap();
    GroupMembershipCriteria::new().execute(&transport).unwrap();
    TenantCriteria::new().execute(&transport).unwrap();

    let paths: Vec<String> = transport
        .requests
        .borrow()
        .iter()
        .map(|r| r.path.clone())
        .collect();
    assert_eq!(
        paths,
        [
            "/accounts",
            "/applications",
            "/directories",
            "/groups",
            "/groupMemberships",
            "/tenants"
        ]
    );
}

#[test]
fn test_transport_errors_pass_through_untouched() {
    let err = ApplicationCriteria::new()
        .expand_accounts()
        .execute(&FailingTransport)
        .unwrap_err();

    assert_eq!(err, TransportFailure(400));
}

#[test]
fn test_transport_by_reference() {
    let transport = RecordingTransport::default();
    let by_ref = &transport;

    TenantCriteria::new().order_by_key().execute(&by_ref).unwrap();
    assert_eq!(transport.requests.borrow()[0].query, "orderBy=key");
}
