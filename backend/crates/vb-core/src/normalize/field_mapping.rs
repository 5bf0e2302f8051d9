/// One column of an entity as it is named in storage and in the application.
///
/// `aliases` are legacy storage names still found in older rows. They are
/// consulted on read only; writes always use `storage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub storage: &'static str,
    pub application: &'static str,
    pub aliases: &'static [&'static str],
}

impl FieldMapping {
    pub const fn new(storage: &'static str, application: &'static str) -> Self {
        Self {
            storage,
            application,
            aliases: &[],
        }
    }

    pub const fn with_aliases(
        storage: &'static str,
        application: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            storage,
            application,
            aliases,
        }
    }

    /// Keys to probe on read, most authoritative first.
    pub fn read_keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.storage)
            .chain(self.aliases.iter().copied())
            .chain(std::iter::once(self.application))
    }
}

/// A joined entity embedded under `key` that gets normalized with `shape`.
#[derive(Debug, Clone, Copy)]
pub struct NestedShape {
    pub key: &'static str,
    pub shape: &'static EntityShape,
}

#[derive(Debug, Clone, Copy)]
pub struct EntityShape {
    pub entity: &'static str,
    pub fields: &'static [FieldMapping],
    pub nested: &'static [NestedShape],
}

impl EntityShape {
    pub fn mapping_for_application(&self, key: &str) -> Option<&FieldMapping> {
        self.fields.iter().find(|m| m.application == key)
    }

    pub fn storage_column(&self, application_key: &str) -> Option<&'static str> {
        self.mapping_for_application(application_key)
            .map(|m| m.storage)
    }
}
