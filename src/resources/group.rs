use restcriteria_core::resource;

resource! {
    /// Criteria for listing groups.
    pub Group {
        path: "/groups",
        expand: [
            directory => "directory",
            tenant => "tenant",
        ],
        collections: [
            accounts => "accounts",
            account_memberships => "accountMemberships",
        ],
        order: [
            name => "name",
            description => "description",
            status => "status",
        ],
        filter: [
            name => "name",
            description => "description",
            status => "status",
        ],
    }
}
