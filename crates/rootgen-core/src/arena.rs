//! Arena allocator for expression storage.
//!
//! Every expression built during one generation request lives in a single
//! arena. Hash-consing ensures each structurally unique expression is
//! stored exactly once, so handle equality is structural equality.

use hashbrown::HashMap;
use rootgen_integers::Integer;

use crate::expr::{Args, ExprNode, SymbolId};
use crate::handle::ExprHandle;

/// The main arena for storing expressions.
#[derive(Debug, Default)]
pub struct ExprArena {
    /// Storage for all expression nodes.
    nodes: Vec<ExprNode>,
    /// Interning table: maps node content to its handle.
    intern_map: HashMap<ExprNode, ExprHandle>,
    /// Symbol table: maps symbol names to their IDs.
    symbols: HashMap<String, SymbolId>,
    /// Reverse symbol table for printing.
    symbol_names: Vec<String>,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            intern_map: HashMap::with_capacity(capacity),
            symbols: HashMap::new(),
            symbol_names: Vec::new(),
        }
    }

    /// Interns an expression node, returning its handle.
    ///
    /// If an identical node already exists, returns the existing handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena holds more than `u32::MAX` nodes.
    pub fn intern(&mut self, node: ExprNode) -> ExprHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            return handle;
        }

        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");

        let handle = ExprHandle::new(index as u32);
        self.nodes.push(node.clone());
        self.intern_map.insert(node, handle);
        handle
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this arena.
    #[must_use]
    pub fn get(&self, handle: ExprHandle) -> &ExprNode {
        &self.nodes[handle.index() as usize]
    }

    /// Interns a symbol name, returning its unique ID.
    ///
    /// Symbol IDs are handed out in creation order.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` symbols are interned.
    pub fn intern_symbol(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.symbols.get(name) {
            return id;
        }

        let index = self.symbol_names.len();
        assert!(index < u32::MAX as usize, "Symbol table exceeded");

        let id = index as SymbolId;
        self.symbols.insert(name.to_string(), id);
        self.symbol_names.push(name.to_string());
        id
    }

    /// Gets the name of a symbol by its ID.
    #[must_use]
    pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
        self.symbol_names.get(id as usize).map(String::as_str)
    }

    /// Looks up the ID of an already interned symbol.
    #[must_use]
    pub fn symbol_id(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).copied()
    }

    /// Returns the symbol ID if `handle` is a bare symbol.
    #[must_use]
    pub fn as_symbol(&self, handle: ExprHandle) -> Option<SymbolId> {
        match self.get(handle) {
            ExprNode::Symbol(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Convenience constructors ===

    /// Creates an integer expression.
    pub fn integer(&mut self, value: Integer) -> ExprHandle {
        self.intern(ExprNode::Integer(value))
    }

    /// Creates an integer expression from a machine integer.
    pub fn int(&mut self, value: i64) -> ExprHandle {
        self.integer(Integer::new(value))
    }

    /// Creates a symbol expression.
    pub fn symbol(&mut self, name: &str) -> ExprHandle {
        let id = self.intern_symbol(name);
        self.intern(ExprNode::Symbol(id))
    }

    /// Creates an addition expression.
    ///
    /// An empty sum is `0`, a single term is returned unchanged.
    pub fn add(&mut self, args: impl IntoIterator<Item = ExprHandle>) -> ExprHandle {
        let args: Args = args.into_iter().collect();
        match args.len() {
            0 => self.int(0),
            1 => args[0],
            _ => self.intern(ExprNode::Add(args)),
        }
    }

    /// Creates a multiplication expression.
    ///
    /// An empty product is `1`, a single factor is returned unchanged.
    pub fn mul(&mut self, args: impl IntoIterator<Item = ExprHandle>) -> ExprHandle {
        let args: Args = args.into_iter().collect();
        match args.len() {
            0 => self.int(1),
            1 => args[0],
            _ => self.intern(ExprNode::Mul(args)),
        }
    }

    /// Creates `a - b` as `a + (-b)`.
    pub fn sub(&mut self, a: ExprHandle, b: ExprHandle) -> ExprHandle {
        let neg_b = self.neg(b);
        self.add([a, neg_b])
    }

    /// Creates a power expression.
    pub fn pow(&mut self, base: ExprHandle, exp: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Pow { base, exp })
    }

    /// Creates `base^n` for a literal exponent.
    ///
    /// `base^0` is `1` and `base^1` is `base`.
    pub fn powi(&mut self, base: ExprHandle, n: u32) -> ExprHandle {
        match n {
            0 => self.int(1),
            1 => base,
            _ => {
                let exp = self.integer(Integer::from(n));
                self.pow(base, exp)
            }
        }
    }

    /// Creates a negation expression.
    pub fn neg(&mut self, arg: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Neg(arg))
    }

    /// Creates an unreduced quotient.
    pub fn div(&mut self, num: ExprHandle, den: ExprHandle) -> ExprHandle {
        self.intern(ExprNode::Div { num, den })
    }
}
