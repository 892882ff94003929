// Code generated by ctorgen. DO NOT EDIT.

#[derive(Debug, Clone, PartialEq)]
pub struct Point<V> {
    x: Option<V>,
    y: Option<V>,
}

impl<V> Point<V> {
    /// Bind positional values to attributes in order.
    ///
    /// Missing values leave attributes unset and surplus values are dropped.
    pub fn new(args: impl IntoIterator<Item = V>) -> Self {
        let mut args = args.into_iter();
        Self {
            x: args.next(),
            y: args.next(),
        }
    }

    pub fn x(&self) -> Option<&V> {
        self.x.as_ref()
    }

    pub fn y(&self) -> Option<&V> {
        self.y.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request<V> {
    method: Option<V>,
    path: Option<V>,
}

impl<V> Request<V> {
    /// Assign entries whose key names an attribute. Other entries are ignored.
    pub fn new<K: AsRef<str>>(map: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut this = Self {
            method: None,
            path: None,
        };
        for (key, value) in map {
            match key.as_ref() {
                "method" => this.method = Some(value),
                "path" => this.path = Some(value),
                _ => {}
            }
        }
        this
    }

    pub fn method(&self) -> Option<&V> {
        self.method.as_ref()
    }

    pub fn path(&self) -> Option<&V> {
        self.path.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    verbose: Option<bool>,
    color: Option<bool>,
}

/// Named arguments for [`Options::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsArgs {
    pub verbose: Option<bool>,
    pub color: Option<bool>,
}

impl Default for OptionsArgs {
    fn default() -> Self {
        Self {
            verbose: None,
            color: None,
        }
    }
}

impl Options {
    /// Assign the named arguments that were provided.
    pub fn new(args: OptionsArgs) -> Self {
        Self {
            verbose: args.verbose,
            color: args.color,
        }
    }

    pub fn verbose(&self) -> Option<&bool> {
        self.verbose.as_ref()
    }

    pub fn color(&self) -> Option<&bool> {
        self.color.as_ref()
    }
}
