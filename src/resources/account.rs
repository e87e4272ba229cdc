use restcriteria_core::resource;

resource! {
    /// Criteria for listing accounts, e.g. a directory's or group's members.
    pub Account {
        path: "/accounts",
        expand: [
            directory => "directory",
            tenant => "tenant",
        ],
        collections: [
            groups => "groups",
            group_memberships => "groupMemberships",
        ],
        order: [
            email => "email",
            username => "username",
            given_name => "givenName",
            middle_name => "middleName",
            surname => "surname",
            status => "status",
        ],
        filter: [
            email => "email",
            username => "username",
            given_name => "givenName",
            middle_name => "middleName",
            surname => "surname",
            status => "status",
        ],
    }
}
