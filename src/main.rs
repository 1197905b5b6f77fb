/// Demostración: construye un documento de configuración representativo
/// (executor reutilizable + jobs con steps del catálogo + workflow) y lo
/// imprime como JSON.
fn run_document_demo() {
    use ciforge_adapters::{Checkout, DockerExecutor, RestoreCache, Run, SaveCache};
    use ciforge_core::{ExecutorBinding, Job};
    use ciforge_rust::{Config, Workflow};

    let mut config = Config::new();
    config.add_executor("rust-lts", DockerExecutor::new("cimg/rust:1.77").with_resource_class("large"))
          .expect("declare reusable executor");

    // Job de build ligado al executor reutilizable
    let mut build = Job::new("build", ExecutorBinding::reusable("rust-lts"));
    let mut restore = RestoreCache::new();
    restore.add_key("deps-v1-{{ checksum \"Cargo.lock\" }}").add_key("deps-v1-");
    let mut save = SaveCache::new("deps-v1-{{ checksum \"Cargo.lock\" }}");
    save.add_path("~/.cargo").add_path("target");
    build.add_step(Checkout::new())
         .add_step(restore)
         .add_step(Run::new("cargo build --release").with_name("compile"))
         .add_step(save);
    config.add_job(build).expect("register build job");

    // Job de test con executor inline propio
    let mut test = Job::new("test", ExecutorBinding::inline(DockerExecutor::new("cimg/rust:1.77")));
    test.add_step(Checkout::new()).add_step(Run::new("cargo test"));
    config.add_job(test).expect("register test job");

    let mut workflow = Workflow::new("build-and-test");
    workflow.add_job("build").add_job("test");
    config.add_workflow(workflow).expect("register workflow");

    let document = config.generate().expect("document generation");
    println!("{}", serde_json::to_string_pretty(&document).expect("pretty print"));
}

/// Demostración de fail-fast: un step con campo obligatorio ausente aborta
/// la generación del documento completo, sin salida parcial.
fn run_failure_demo() {
    use ciforge_adapters::{DockerExecutor, RestoreCache};
    use ciforge_core::{ExecutorBinding, Generate, Job};

    let mut job = Job::new("broken", ExecutorBinding::inline(DockerExecutor::new("cimg/base:2024.01")));
    job.add_step(RestoreCache::new()); // sin claves

    match job.generate() {
        Ok(_) => println!("unexpected: broken job generated a document"),
        Err(e) => println!("fail-fast como se esperaba: {e}"),
    }
}

fn main() {
    run_document_demo();
    run_failure_demo();
}
