use smallvec::SmallVec;

use pixelpad_engine::coords::Vec2;

/// Upper bound on simultaneously tracked contacts.
pub const MAX_CONTACTS: usize = 10;

/// Session-unique identifier of one contact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ContactId(pub u64);

impl ContactId {
    /// The mouse pointer. Touch ids never collide with it.
    pub const MOUSE: ContactId = ContactId(u64::MAX);
}

/// Last known state of one contact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    pub id: ContactId,
    /// Screen position, logical px.
    pub position: Vec2,
    /// Movement accumulated since the last [`ContactTable::end_frame`].
    pub movement: Vec2,
}

/// Small insertion-ordered table of active contacts.
///
/// Order matters: gesture classification uses the two oldest contacts.
#[derive(Debug, Default, Clone)]
pub struct ContactTable {
    contacts: SmallVec<[Contact; 4]>,
}

impl ContactTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Starts tracking `id` at `position` with zero movement.
    ///
    /// A known id is restarted in place. Returns `false` when the table is
    /// full and the contact was dropped.
    pub fn insert(&mut self, id: ContactId, position: Vec2) -> bool {
        let fresh = Contact { id, position, movement: Vec2::zero() };

        if let Some(c) = self.contacts.iter_mut().find(|c| c.id == id) {
            *c = fresh;
            return true;
        }

        if self.contacts.len() >= MAX_CONTACTS {
            log::debug!("contact table full; ignoring contact {id:?}");
            return false;
        }

        self.contacts.push(fresh);
        true
    }

    /// Moves a tracked contact, adding to the movement of the current frame.
    ///
    /// Returns the updated contact, or `None` for an untracked id.
    pub fn update(&mut self, id: ContactId, position: Vec2) -> Option<Contact> {
        let c = self.contacts.iter_mut().find(|c| c.id == id)?;
        c.movement = c.movement + (position - c.position);
        c.position = position;
        Some(*c)
    }

    /// Zeroes every contact's movement; positions are kept.
    pub fn end_frame(&mut self) {
        for c in &mut self.contacts {
            c.movement = Vec2::zero();
        }
    }

    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let i = self.contacts.iter().position(|c| c.id == id)?;
        Some(self.contacts.remove(i))
    }

    /// The two oldest contacts, if at least two are active.
    pub fn first_two(&self) -> Option<(Contact, Contact)> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn clear(&mut self) {
        self.contacts.clear();
    }
}
