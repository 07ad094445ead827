use std::fmt::Display;

pub struct Error(syn::Error);
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new<T: Display>(span: proc_macro2::Span, message: T) -> Self {
        Error(syn::Error::new(span, message))
    }
    pub fn to_compile_error(&self) -> proc_macro2::TokenStream {
        self.0.to_compile_error()
    }
}

impl From<syn::Error> for Error {
    fn from(err: syn::Error) -> Self {
        Error(err)
    }
}

impl From<Error> for proc_macro2::TokenStream {
    fn from(err: Error) -> Self {
        err.to_compile_error()
    }
}
impl From<Error> for proc_macro::TokenStream {
    fn from(err: Error) -> Self {
        err.to_compile_error().into()
    }
}
