/// Accumulates attribute errors so one expansion reports all of them.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Records the error of a failed result, passing a success through.
    pub(crate) fn check<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        match res {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Returns `value` if nothing was recorded, otherwise every recorded
    /// error combined into one.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        let combined = self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        });

        match combined {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
