/*! Device scoped runtime registry.
 *
 * Maps a device to the runtimes currently active on it. Lock order is the
 * device map first, then a device entry. An entry is only ever dropped after
 * both locks are released.
 */

use std::sync::Arc;

use fxhash::FxHashMap;
use parking_lot::Mutex;
use smallvec::SmallVec;

pub type RuntimeSet<R> = SmallVec<[Arc<R>; 2]>;

struct DeviceRuntimes<R: ?Sized> {
    runtimes: Mutex<RuntimeSet<R>>,
}

fn same<R: ?Sized>(a: &Arc<R>, b: &Arc<R>) -> bool {
    // Compare data pointers only, vtables of the same object may differ.
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

/// Runtimes active per device.
pub struct RuntimeRegistry<R: ?Sized> {
    devices: Mutex<FxHashMap<ipt::DeviceId, Arc<DeviceRuntimes<R>>>>,
}

impl<R: ?Sized> Default for RuntimeRegistry<R> {
    fn default() -> Self {
        Self {
            devices: Mutex::new(FxHashMap::default()),
        }
    }
}

impl<R: ?Sized> RuntimeRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `runtime` to the set of `device`, creating the set on first use.
    ///
    /// Registering the same runtime twice has no effect.
    pub fn register(&self, device: ipt::DeviceId, runtime: &Arc<R>) {
        let active = {
            let mut devices = self.devices.lock();
            let entry = devices.entry(device).or_insert_with(|| {
                Arc::new(DeviceRuntimes {
                    runtimes: Mutex::new(SmallVec::new()),
                })
            });
            let mut runtimes = entry.runtimes.lock();
            if runtimes.iter().any(|other| same(other, runtime)) {
                return;
            }
            runtimes.push(Arc::clone(runtime));
            runtimes.len()
        };
        log::info!("Registered runtime on {:?}, {} active", device, active);
    }

    /// Removes `runtime` from the set of `device`, and drops the set once it
    /// is empty.
    ///
    /// With `runtime` set to `None` nothing is removed, but an empty set is
    /// still dropped.
    pub fn unregister(&self, device: ipt::DeviceId, runtime: Option<&Arc<R>>) {
        let entry = self.devices.lock().get(&device).cloned();
        let Some(entry) = entry else {
            return;
        };

        let (removed, active) = {
            let mut runtimes = entry.runtimes.lock();
            let count = runtimes.len();
            if let Some(runtime) = runtime {
                runtimes.retain(|other| !same(other, runtime));
            }
            (runtimes.len() != count, runtimes.len())
        };
        if removed {
            log::info!("Unregistered runtime on {:?}, {} active", device, active);
        }
        if active != 0 {
            return;
        }

        let detached = {
            let mut devices = self.devices.lock();
            // The set may have been refilled, or replaced, since it was unlocked.
            let stale = devices.get(&device).map_or(false, |current| {
                Arc::ptr_eq(current, &entry) && current.runtimes.lock().is_empty()
            });
            if stale {
                devices.remove(&device)
            } else {
                None
            }
        };
        if detached.is_some() {
            log::info!("Dropped runtime set of {:?}", device);
        }
    }

    /// Returns a copy of the runtimes active on `device`.
    pub fn lookup(&self, device: ipt::DeviceId) -> RuntimeSet<R> {
        let entry = self.devices.lock().get(&device).cloned();
        match entry {
            Some(entry) => entry.runtimes.lock().clone(),
            None => SmallVec::new(),
        }
    }

    /// Returns `true` if `device` has a runtime set.
    pub fn contains(&self, device: ipt::DeviceId) -> bool {
        self.devices.lock().contains_key(&device)
    }
}
