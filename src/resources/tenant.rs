use restcriteria_core::resource;

resource! {
    /// Criteria for tenants.
    pub Tenant {
        path: "/tenants",
        expand: [],
        collections: [
            applications => "applications",
            directories => "directories",
        ],
        order: [
            name => "name",
            key => "key",
        ],
        filter: [
            name => "name",
            key => "key",
        ],
    }
}
