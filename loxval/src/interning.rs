use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::{ObjectRef, ObjectRenderer};

// strings are never removed, a handle stays valid as long as the table lives
struct InternedStringsImpl {
    table: Vec<Arc<str>>,
    mappings: HashMap<Arc<str>, ObjectRef>,
}

/// Minimal string heap: equal contents always get the same handle, so
/// handle equality is string equality.
#[derive(Clone)]
pub struct InternedStrings(Arc<RwLock<InternedStringsImpl>>);

impl InternedStringsImpl {
    fn new() -> Self {
        Self {
            table: Vec::new(),
            mappings: HashMap::new(),
        }
    }

    fn get_or_add(&mut self, value: &str) -> ObjectRef {
        if let Some(&id) = self.mappings.get(value) {
            return id;
        }
        let id = ObjectRef::new(table_index(self.table.len()));
        let interned = Arc::<str>::from(value);
        self.table.push(interned.clone());
        self.mappings.insert(interned, id);
        id
    }
}

/// Handle index for the next string. Running past `u32::MAX` strings is
/// fatal for the runtime, like running out of memory in `ValueArray::append`.
fn table_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(index) => index,
        Err(_) => {
            log::error!("string table exhausted at {len} entries");
            panic!("string table exhausted at {len} entries");
        }
    }
}

impl InternedStrings {
    pub fn new() -> Self {
        Self(Arc::new(RwLock::new(InternedStringsImpl::new())))
    }

    /// Handle for `value`, adding it if it is new.
    ///
    /// Panics once the table holds more strings than a handle can index.
    pub fn intern(&self, value: &str) -> ObjectRef {
        if let Some(&id) = self.0.read().mappings.get(value) {
            return id;
        }
        self.0.write().get_or_add(value)
    }

    pub fn get(&self, id: ObjectRef) -> Option<Arc<str>> {
        self.0.read().table.get(id.index() as usize).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.read().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InternedStrings {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectRenderer for InternedStrings {
    fn render_object(&self, object: ObjectRef) -> String {
        match self.get(object) {
            Some(s) => s.to_string(),
            None => format!("<object #{}>", object.index()),
        }
    }
}
