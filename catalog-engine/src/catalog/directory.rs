//! Branch Directory
//!
//! Branch metadata of one store, keyed by branch id.

use crate::error::NotFound;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Branch, BranchUpdate, BusinessType, Store};
use shared::BranchId;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct BranchDirectory {
    store: Store,
    branches: BTreeMap<BranchId, Branch>,
}

impl BranchDirectory {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            branches: BTreeMap::new(),
        }
    }

    pub fn with_branches(
        store: Store,
        branches: impl IntoIterator<Item = Branch>,
    ) -> AppResult<Self> {
        let mut directory = Self::new(store);
        for branch in branches {
            directory.insert(branch)?;
        }
        Ok(directory)
    }

    /// Register a branch of this store
    pub fn insert(&mut self, branch: Branch) -> AppResult<()> {
        if branch.store_id != self.store.id {
            return Err(AppError::with_message(
                ErrorCode::BranchStoreMismatch,
                format!(
                    "branch {} belongs to store {}, not {}",
                    branch.id, branch.store_id, self.store.id
                ),
            )
            .with_detail("branch_id", branch.id));
        }
        if branch.business_type != self.store.business_type {
            return Err(AppError::validation(format!(
                "branch {} must use the store business type",
                branch.id
            ))
            .with_detail("branch_id", branch.id));
        }
        if self.branches.contains_key(&branch.id) {
            return Err(AppError::with_message(
                ErrorCode::BranchAlreadyExists,
                format!("branch {} already exists", branch.id),
            )
            .with_detail("branch_id", branch.id));
        }
        self.branches.insert(branch.id, branch);
        Ok(())
    }

    pub fn update(&mut self, branch_id: BranchId, update: BranchUpdate) -> AppResult<&Branch> {
        let branch = self
            .branches
            .get_mut(&branch_id)
            .ok_or_else(|| AppError::from(NotFound::Branch { branch_id }))?;
        branch.apply_update(update);
        Ok(branch)
    }

    /// Business type is fixed once the store has branches
    pub fn set_business_type(&mut self, business_type: BusinessType) -> AppResult<()> {
        if business_type == self.store.business_type {
            return Ok(());
        }
        if !self.branches.is_empty() {
            return Err(AppError::new(ErrorCode::BusinessTypeLocked)
                .with_detail("store_id", self.store.id));
        }
        self.store.business_type = business_type;
        Ok(())
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn get(&self, branch_id: BranchId) -> Option<&Branch> {
        self.branches.get(&branch_id)
    }

    pub fn require(&self, branch_id: BranchId) -> Result<&Branch, NotFound> {
        self.get(branch_id).ok_or(NotFound::Branch { branch_id })
    }

    pub fn contains(&self, branch_id: BranchId) -> bool {
        self.branches.contains_key(&branch_id)
    }

    /// Branch ids in ascending order
    pub fn branch_ids(&self) -> impl Iterator<Item = BranchId> + '_ {
        self.branches.keys().copied()
    }

    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.values()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
