use restcriteria_core::resource;

resource! {
    /// Criteria for listing a tenant's applications.
    pub Application {
        path: "/applications",
        expand: [tenant => "tenant"],
        collections: [
            accounts => "accounts",
            groups => "groups",
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
