pub mod launch_at_startup;
