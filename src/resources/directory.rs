use restcriteria_core::resource;

resource! {
    /// Criteria for listing directories.
    pub Directory {
        path: "/directories",
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
