use sql_class_gen::Opt;
use structopt::StructOpt;

fn main() {
	env_logger::init();
	let opt = Opt::from_args();

	let result = opt
		.get_client()
		.and_then(|mut client| client.get_all())
		.and_then(|database| database.make_output(&opt));

	if let Err(e) = result {
		eprintln!("{}", e);
		std::process::exit(1);
	}
}
