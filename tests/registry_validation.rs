//! Validación del registro de declaraciones: duplicados y referencias a
//! elementos no declarados fallan al registrar, no al generar.

use ciforge_adapters::{DockerExecutor, RestoreCache};
use ciforge_core::{ExecutorBinding, GenerateError, Job};
use ciforge_rust::{Config, ConfigError, Workflow};

#[test]
fn duplicate_executor_is_rejected() {
    let mut config = Config::new();
    config.add_executor("base", DockerExecutor::new("cimg/base:2024.01")).expect("first");

    let err = config.add_executor("base", DockerExecutor::new("cimg/base:2024.05")).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateExecutor("base".into()));
}

#[test]
fn duplicate_job_is_rejected() {
    let mut config = Config::new();
    config.add_job(Job::new("build", ExecutorBinding::inline(DockerExecutor::new("a")))).expect("first");

    let err = config.add_job(Job::new("build", ExecutorBinding::inline(DockerExecutor::new("b")))).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateJob("build".into()));
}

#[test]
fn job_with_undeclared_reusable_executor_is_rejected_at_registration() {
    let mut config = Config::new();

    let err = config.add_job(Job::new("deploy", ExecutorBinding::reusable("ghost"))).unwrap_err();
    assert_eq!(err,
               ConfigError::UndeclaredExecutor { job: "deploy".into(),
                                                 executor: "ghost".into() });
}

#[test]
fn declaration_must_precede_use() {
    let mut config = Config::new();
    config.add_executor("base", DockerExecutor::new("cimg/base:2024.01")).expect("executor");

    config.add_job(Job::new("ok", ExecutorBinding::reusable("base"))).expect("declared before use");
}

#[test]
fn workflow_referencing_unknown_job_is_rejected() {
    let mut config = Config::new();
    let mut wf = Workflow::new("broken");
    wf.add_job("missing");

    let err = config.add_workflow(wf).unwrap_err();
    assert_eq!(err,
               ConfigError::UnknownWorkflowJob { workflow: "broken".into(),
                                                 job: "missing".into() });
}

#[test]
fn duplicate_workflow_is_rejected() {
    let mut config = Config::new();
    config.add_workflow(Workflow::new("main")).expect("first");

    let err = config.add_workflow(Workflow::new("main")).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateWorkflow("main".into()));
}

#[test]
fn generation_failure_propagates_through_the_aggregator() {
    let mut config = Config::new();
    let mut job = Job::new("cachey", ExecutorBinding::inline(DockerExecutor::new("cimg/base:2024.01")));
    job.add_step(RestoreCache::new()); // campo obligatorio ausente

    config.add_job(job).expect("registration does not generate");
    let err = config.generate().unwrap_err();
    assert_eq!(err,
               ConfigError::Generate(GenerateError::MissingField { component: "restore_cache",
                                                                   field: "keys" }));
}
