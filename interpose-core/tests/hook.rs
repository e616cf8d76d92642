use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use hal::CommandList as _;
use interpose_core::{
    hook::FeatureHandle, EffectRuntime, EvaluateFeature, EvaluateFeatureHook, FeatureResult,
    HookError, InjectionDescriptor, Install, RuntimeRegistry,
};
use ipt::{Format, PrimitiveTopology};

use crate::common::{
    device_id, init_logger, proxy, CountingOriginal, Mock, MockDevice, MockResource, MockRuntime,
    Parameters,
};

pub type Registry = RuntimeRegistry<dyn EffectRuntime<Mock>>;

pub struct Installer {
    pub original: Arc<CountingOriginal>,
    pub missing: bool,
}

impl Install<dyn EvaluateFeature<Mock>> for Installer {
    fn install(&self, export_name: &str) -> Result<Arc<dyn EvaluateFeature<Mock>>, HookError> {
        if self.missing {
            return Err(HookError::ExportNotFound(export_name.to_string()));
        }
        Ok(self.original.clone())
    }
}

pub fn hook(registry: &Arc<Registry>) -> (EvaluateFeatureHook<Mock>, Arc<CountingOriginal>) {
    let original = Arc::new(CountingOriginal::default());
    let installer = Installer {
        original: Arc::clone(&original),
        missing: false,
    };
    let hook = EvaluateFeatureHook::install(
        &installer,
        Arc::clone(registry),
        InjectionDescriptor::default(),
    )
    .unwrap();
    (hook, original)
}

pub fn register(registry: &Registry, runtime: &Arc<MockRuntime>) {
    let runtime: Arc<dyn EffectRuntime<Mock>> = runtime.clone();
    registry.register(runtime.device_id(), &runtime);
}

const FEATURE: FeatureHandle = FeatureHandle { id: 1 };

#[test]
fn effects_are_injected_before_the_feature() {
    init_logger();
    let device = MockDevice::new(device_id(1));
    let registry = Arc::new(Registry::new());
    let runtime = MockRuntime::new(device_id(1), |list| list.draw_instanced(3, 1, 0, 0));
    register(&registry, &runtime);
    let (hook, original) = hook(&registry);

    let mut list = proxy(&device);
    list.ia_set_primitive_topology(PrimitiveTopology::TriangleList);
    let tracked = list.state().clone();
    let color = MockResource {
        format: Format::R8G8B8A8Unorm,
    };
    let parameters = Parameters { color: Some(&color) };

    let result = hook.evaluate(Some(&mut list), Some(&FEATURE), Some(&parameters), None);

    assert_eq!(result, FeatureResult::SUCCESS);
    assert_eq!(runtime.rendered.lock().len(), 1);
    assert_eq!(original.calls.load(Ordering::SeqCst), 1);
    assert_eq!(original.calls_with_list.load(Ordering::SeqCst), 1);
    assert_eq!(*list.state(), tracked);

    let calls = &list.raw().calls;
    assert_eq!(calls.first(), Some(&"ia_set_primitive_topology"));
    assert_eq!(calls.last(), Some(&"dispatch"));
    assert_eq!(list.raw().count("resource_barrier"), 2);
    assert_eq!(list.raw().count("draw_instanced"), 1);
}

fn assert_skipped(registry: &Arc<Registry>, parameters: &Parameters) {
    let device = MockDevice::new(device_id(1));
    let (hook, original) = hook(registry);
    let mut list = proxy(&device);
    list.ia_set_primitive_topology(PrimitiveTopology::LineStrip);
    let tracked = list.state().clone();

    let result = hook.evaluate(Some(&mut list), Some(&FEATURE), Some(parameters), None);

    assert!(result.is_success());
    assert_eq!(original.calls.load(Ordering::SeqCst), 1);
    assert_eq!(original.calls_with_list.load(Ordering::SeqCst), 1);
    assert_eq!(*list.state(), tracked);
    assert_eq!(list.raw().count("resource_barrier"), 0);
    assert!(device.created.lock().is_empty());
}

#[test]
fn no_runtime_on_the_device_forwards_untouched() {
    init_logger();
    let color = MockResource {
        format: Format::R8G8B8A8Unorm,
    };
    let parameters = Parameters { color: Some(&color) };

    let registry = Arc::new(Registry::new());
    assert_skipped(&registry, &parameters);

    // A runtime on another device does not count.
    let elsewhere = MockRuntime::new(device_id(2), |_| {});
    register(&registry, &elsewhere);
    assert_skipped(&registry, &parameters);
    assert!(elsewhere.rendered.lock().is_empty());
}

#[test]
fn disabled_runtime_forwards_untouched() {
    let color = MockResource {
        format: Format::R8G8B8A8Unorm,
    };
    let registry = Arc::new(Registry::new());
    let runtime = MockRuntime::new(device_id(1), |_| {});
    runtime.enabled.store(false, Ordering::SeqCst);
    register(&registry, &runtime);

    assert_skipped(&registry, &Parameters { color: Some(&color) });
    assert!(runtime.rendered.lock().is_empty());
}

#[test]
fn missing_color_input_forwards_untouched() {
    let registry = Arc::new(Registry::new());
    let runtime = MockRuntime::new(device_id(1), |_| {});
    register(&registry, &runtime);

    assert_skipped(&registry, &Parameters { color: None });
    assert!(runtime.rendered.lock().is_empty());
}

#[test]
fn null_arguments_are_forwarded() {
    let device = MockDevice::new(device_id(1));
    let registry = Arc::new(Registry::new());
    let runtime = MockRuntime::new(device_id(1), |_| {});
    register(&registry, &runtime);
    let (hook, original) = hook(&registry);
    let color = MockResource {
        format: Format::R8G8B8A8Unorm,
    };

    let result = hook.evaluate(None, Some(&FEATURE), Some(&Parameters { color: Some(&color) }), None);
    assert_eq!(result, FeatureResult::SUCCESS);
    assert_eq!(original.calls.load(Ordering::SeqCst), 1);
    assert_eq!(original.calls_with_list.load(Ordering::SeqCst), 0);

    let mut list = proxy(&device);
    hook.evaluate(Some(&mut list), None, None, None);
    assert_eq!(original.calls.load(Ordering::SeqCst), 2);
    assert_eq!(original.calls_with_list.load(Ordering::SeqCst), 1);
    assert_eq!(list.raw().calls, ["dispatch"]);
    assert!(runtime.rendered.lock().is_empty());
}

#[test]
fn progress_callback_reaches_the_original() {
    struct Progress {
        called: AtomicBool,
    }
    impl EvaluateFeature<Mock> for Progress {
        fn evaluate(
            &self,
            _: Option<&mut interpose_core::CommandListProxy<Mock>>,
            _: Option<&FeatureHandle>,
            _: Option<&dyn interpose_core::FeatureParameters<Mock>>,
            progress: Option<interpose_core::hook::ProgressCallback>,
        ) -> FeatureResult {
            if let Some(progress) = progress {
                let mut cancel = false;
                progress(0.5, &mut cancel);
                self.called.store(true, Ordering::SeqCst);
            }
            FeatureResult::SUCCESS
        }
    }

    let original = Arc::new(Progress {
        called: AtomicBool::new(false),
    });
    let hook = EvaluateFeatureHook::new(
        original.clone(),
        Arc::new(Registry::new()),
        InjectionDescriptor::default(),
    );
    let mut reported = Vec::new();
    let mut progress = |value: f32, _: &mut bool| reported.push(value);
    hook.evaluate(None, None, None, Some(&mut progress));

    assert!(original.called.load(Ordering::SeqCst));
    assert_eq!(reported, [0.5]);
}

#[test]
fn missing_export_fails_installation() {
    let installer = Installer {
        original: Arc::new(CountingOriginal::default()),
        missing: true,
    };
    let result = EvaluateFeatureHook::install(
        &installer,
        Arc::new(Registry::new()),
        InjectionDescriptor::default(),
    );
    match result {
        Err(HookError::ExportNotFound(name)) => {
            assert_eq!(name, EvaluateFeatureHook::<Mock>::EXPORT_NAME)
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("installation should fail"),
    }
}

#[test]
fn failed_result_codes() {
    assert!(FeatureResult::SUCCESS.is_success());
    assert!(!FeatureResult::FAIL.is_success());
    assert!(!FeatureResult(0xBAD0_0005).is_success());
}
