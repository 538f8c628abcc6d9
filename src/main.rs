use log::info;
use symptom_classifier::utils::logging::log_unknown_symptoms;
use symptom_classifier::{Algorithm, Result, build_models, predict_symptoms, ulcer_type};

/// Symptoms predicted when none are given on the command line
const SAMPLE_SYMPTOMS: [&str; 3] = ["itching", "skin_rash", "nodal_skin_eruptions"];

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: symptom-classifier [ALGORITHM] [SYMPTOM ...]
    let mut args = std::env::args().skip(1).peekable();
    let algorithm = match args.peek().map(|a| a.parse::<Algorithm>()) {
        Some(Ok(algorithm)) => {
            args.next();
            algorithm
        }
        _ => Algorithm::Auto,
    };
    let mut symptoms: Vec<String> = args.collect();
    if symptoms.is_empty() {
        info!("No symptoms given, using the sample set");
        symptoms = SAMPLE_SYMPTOMS.iter().map(|s| (*s).to_string()).collect();
    }

    let models = build_models(true)?;
    let unknown: Vec<&str> = symptoms
        .iter()
        .map(String::as_str)
        .filter(|s| models.symptoms().position(s).is_none())
        .collect();
    log_unknown_symptoms(&unknown);

    match predict_symptoms(&symptoms, &algorithm.to_string())? {
        Some(disease) => {
            println!("Predicted disease ({algorithm}): {disease}");
            if let Some(ulcer) = ulcer_type(&disease) {
                println!("Ulcer type: {ulcer}");
            }
        }
        None => println!("Could not predict a disease for the given symptoms"),
    }

    Ok(())
}
