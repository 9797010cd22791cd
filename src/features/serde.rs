use core::{
    fmt::{self, Display},
    marker::PhantomData,
};

use serde::{
    Deserialize, Serialize,
    de::{self, SeqAccess, Visitor},
};

use crate::{
    Vec,
    alloc::{AllocError, Allocator},
};

struct AllocationFailed;

impl Display for AllocationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("allocation failed")
    }
}

fn map_alloc_error<E: de::Error>(result: Result<(), AllocError>) -> Result<(), E> {
    match result {
        Ok(()) => Ok(()),
        Err(AllocError) => Err(E::custom(&AllocationFailed)),
    }
}

impl<T: Serialize, A: Allocator> Serialize for Vec<T, A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        <[T]>::serialize(self, serializer)
    }
}

impl<'de, T: Deserialize<'de>, A: Allocator + Default> Deserialize<'de> for Vec<T, A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct VecVisitor<T, A> {
            marker: PhantomData<fn() -> (T, A)>,
        }

        impl<'de, T: Deserialize<'de>, A: Allocator + Default> Visitor<'de> for VecVisitor<T, A> {
            type Value = Vec<T, A>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an array")
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut vec = Vec::new_in(A::default());

                if let Some(hint) = seq.size_hint() {
                    map_alloc_error(vec.try_reserve(hint))?;
                }

                while let Some(value) = seq.next_element()? {
                    map_alloc_error(vec.try_push(value))?;
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(VecVisitor { marker: PhantomData })
    }
}
