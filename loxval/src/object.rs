/// Non-owning handle to a heap object.
///
/// The handle is an index into a table owned by the heap layer. Values only
/// carry it around; they never free the object or keep it alive, that is the
/// collector's business.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectRef(u32);

impl ObjectRef {
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl From<u32> for ObjectRef {
    fn from(index: u32) -> Self {
        Self::new(index)
    }
}

/// Hook into the heap layer used when a value is printed.
pub trait ObjectRenderer {
    fn render_object(&self, object: ObjectRef) -> String;
}

impl<R: ObjectRenderer + ?Sized> ObjectRenderer for &R {
    fn render_object(&self, object: ObjectRef) -> String {
        (**self).render_object(object)
    }
}
