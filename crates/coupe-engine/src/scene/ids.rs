macro_rules! handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }
    };
}

handle!(
    /// Index into `render::MeshStore`.
    MeshId
);
handle!(
    /// Index into `render::TextureStore`.
    TextureId
);
handle!(
    /// Index into `shader::ProgramStore`.
    ProgramId
);
