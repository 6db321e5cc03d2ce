use super::*;

impl SymbolTable {
    /// Look up a value by dotted path, walking into objects.
    ///
    /// An exact top-level key wins over path splitting, so `a.b` first
    /// matches a key literally named `a.b`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.entries.get(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let mut current = self.entries.get(segments.next()?)?;

        for seg in segments {
            current = current.as_object()?.get(seg)?;
        }

        Some(current)
    }

    /// Get a typed value using dot notation.
    ///
    /// # Examples
    /// ```
    /// # use tfvars_subst::SymbolTable;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let table = SymbolTable::from_str("region = \"eu-west-1\"\nreplicas = 3")?;
    /// let region: String = table.get_as("region")?;
    /// let replicas: i64 = table.get_as("replicas")?;
    /// assert_eq!(region, "eu-west-1");
    /// assert_eq!(replicas, 3);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `KeyNotFound` if the path doesn't exist, `TypeError` if the value
    /// can't be converted to `T`.
    pub fn get_as<T>(&self, path: &str) -> Result<T, VarsError>
    where
        T: TryFrom<Value, Error = VarsError>,
    {
        let value = self.lookup(path).cloned().ok_or_else(|| VarsError::KeyNotFound {
            path: path.to_string(),
            hint: Some("Check that the key is defined in one of the definition files".into()),
            code: Some(304),
        })?;

        T::try_from(value).map_err(|e| match e {
            VarsError::TypeError { message, hint, code } => VarsError::TypeError {
                message: format!("{} (at '{}')", message, path),
                hint,
                code,
            },
            other => other,
        })
    }

    /// Like [`get_as`](Self::get_as) but a missing path is `Ok(None)`.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, VarsError>
    where
        T: TryFrom<Value, Error = VarsError>,
    {
        match self.get_as(path) {
            Ok(value) => Ok(Some(value)),
            Err(VarsError::KeyNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = VarsError>,
    {
        self.get_as(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }
}
