use crate::Vec;
use crate::types::types::Type;
use bumpalo::Bump;
use core::cell::{Cell, RefCell};
use hashbrown::{DefaultHashBuilder, HashMap};

/// Allocates and interns type descriptors.
///
/// All descriptors produced by one manager live in its arena and are
/// interned: structurally equal descriptors are pointer-equal. Type
/// variables are the deliberate exception: every variable carries an id
/// drawn from this manager, and resolution passes request fresh ids so
/// that `a` in one pass never unifies with `a` in another.
pub struct TypeManager<'a> {
    // Arena holding all types from this TypeManager.
    arena: &'a Bump,
    interned_strs: RefCell<HashMap<&'a str, &'a str, DefaultHashBuilder, &'a Bump>>,
    interned: RefCell<HashMap<Type<'a>, &'a Type<'a>, DefaultHashBuilder, &'a Bump>>,
    next_var: Cell<u32>,
}

impl<'a> TypeManager<'a> {
    pub fn new(arena: &'a Bump) -> &'a Self {
        arena.alloc(Self {
            arena,
            interned_strs: RefCell::new(HashMap::new_in(arena)),
            interned: RefCell::new(HashMap::new_in(arena)),
            next_var: Cell::new(0),
        })
    }

    pub(crate) fn arena(&self) -> &'a Bump {
        self.arena
    }

    pub(crate) fn intern_str(&self, s: &str) -> &'a str {
        if let Some(&interned_str) = self.interned_strs.borrow().get(s) {
            return interned_str;
        }
        let arena_str = self.arena.alloc_str(s);
        self.interned_strs.borrow_mut().insert(arena_str, arena_str);
        arena_str
    }

    fn intern(&self, ty: Type<'a>) -> &'a Type<'a> {
        if let Some(&interned_ty) = self.interned.borrow().get(&ty) {
            return interned_ty;
        }
        let arena_ty = self.arena.alloc(ty.clone());
        self.interned.borrow_mut().insert(ty, arena_ty);
        arena_ty
    }

    /// Draws the next type-variable id. Each resolution pass draws fresh
    /// ids, which keeps variables from distinct passes distinct.
    pub fn fresh_var_id(&self) -> u32 {
        let id = self.next_var.get();
        self.next_var
            .set(id.checked_add(1).expect("type variable id overflowed"));
        id
    }

    /// A type variable with a freshly drawn id.
    pub fn fresh_var(&self, name: &str) -> &'a Type<'a> {
        let name = self.intern_str(name);
        let id = self.fresh_var_id();
        self.intern(Type::Var { id, name })
    }

    /// A constrained type variable applied to `arg`. Callers pass the same
    /// id for every occurrence of one variable within a pass, so `f a` and
    /// `f b` share the variable while remaining distinct descriptors.
    pub fn unary_var(&self, id: u32, name: &str, arg: &'a Type<'a>) -> &'a Type<'a> {
        let name = self.intern_str(name);
        self.intern(Type::UnaryVar { id, name, arg })
    }

    // Factory methods for descriptor shapes.

    pub fn nullary(&self, name: &str) -> &'a Type<'a> {
        let name = self.intern_str(name);
        self.intern(Type::Nullary { name })
    }

    pub fn unary(&self, name: &str, arg: &'a Type<'a>) -> &'a Type<'a> {
        let name = self.intern_str(name);
        self.intern(Type::Unary { name, arg })
    }

    pub fn binary(&self, name: &str, fst: &'a Type<'a>, snd: &'a Type<'a>) -> &'a Type<'a> {
        let name = self.intern_str(name);
        self.intern(Type::Binary { name, fst, snd })
    }

    pub fn function(&self, param: &'a Type<'a>, ret: &'a Type<'a>) -> &'a Type<'a> {
        self.intern(Type::Function { param, ret })
    }

    pub fn list(&self, elem: &'a Type<'a>) -> &'a Type<'a> {
        self.intern(Type::List(elem))
    }

    /// A record descriptor. Field names are interned; field order is kept
    /// exactly as given.
    pub fn record(&self, fields: Vec<(&str, &'a Type<'a>)>) -> &'a Type<'a> {
        let interned_fields: Vec<(&'a str, &'a Type<'a>)> = fields
            .into_iter()
            .map(|(name, ty)| (self.intern_str(name), ty))
            .collect();
        let arena_fields = self.arena.alloc_slice_copy(&interned_fields);
        self.intern(Type::Record(arena_fields))
    }

    pub fn unknown(&self) -> &'a Type<'a> {
        self.intern(Type::Unknown)
    }

    pub fn thunk(&self) -> &'a Type<'a> {
        self.intern(Type::Thunk)
    }
}
