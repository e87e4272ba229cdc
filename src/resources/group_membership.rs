use restcriteria_core::resource;

resource! {
    /// Criteria for listing account-to-group memberships.
    ///
    /// Memberships have no attributes of their own to order or filter on; only
    /// the two ends of the link can be expanded.
    pub GroupMembership {
        path: "/groupMemberships",
        expand: [
            account => "account",
            group => "group",
        ],
        collections: [],
        order: [],
        filter: [],
    }
}
