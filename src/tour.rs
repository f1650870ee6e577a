//! The compiled-in showcase tour
//!
//! Nine stops around the vehicle, authored in the body's local frame so the
//! whole route spins with it. Coordinates are framed against the body:
//! center X -1.09, nose Z +1.45, tail Z -1.52, wing Z -2.10.

use glam::Vec3;
use showroom_core::Keyframe;

/// Greeting shown before the first assistant exchange
pub const WELCOME_MESSAGE: &str = "Welcome to the Ghost configuration interface. \
Ask me about the engineering specs, history, or performance data of this machine.";

/// Fixed persona the assistant never leaves
pub const ASSISTANT_PERSONA: &str = "\
You are the AI assistant for a high-end automotive showcase of a hypercar.
Your tone is sophisticated, technical, and concise.
You are embedded in a 3D experience.
Focus on engineering excellence, carbon fiber construction, and extreme performance figures.
Do not be overly flowery, stay grounded in engineering facts.
If asked about the car model, acknowledge it is a digital representation of a concept hypercar.";

/// The ordered camera path around the vehicle
pub fn showcase_path() -> Vec<Keyframe> {
    vec![
        // High front three-quarter opener
        Keyframe::new(Vec3::new(2.5, 1.4, 4.0), Vec3::new(-1.09, 0.4, 0.0))
            .with_caption("THE GHOST", "INITIATING SEQUENCE")
            .with_description(
                "Subsystems initialize in sequence as the chassis runs a full diagnostic sweep.",
            ),
        // Tight on the front-left wheel
        Keyframe::new(Vec3::new(0.6, 0.35, 1.8), Vec3::new(-0.21, 0.35, 1.43))
            .with_caption("PRECISION", "CARBON CERAMIC BRAKES")
            .with_description(
                "Carbon-ceramic discs convert violent deceleration into controlled heat \
                 dispersion, sustaining repeat performance without fade.",
            ),
        // Sliding down the flank
        Keyframe::new(Vec3::new(2.8, 0.9, 1.0), Vec3::new(-1.09, 0.6, 0.5))
            .with_caption("AERODYNAMICS", "SCULPTED BY WIND")
            .with_description(
                "Flow channels redirect pressure zones across composite surfaces refined \
                 through thousands of computational hours.",
            ),
        // High rear view on the wing
        Keyframe::new(Vec3::new(1.0, 1.6, -3.5), Vec3::new(-1.11, 1.13, -2.10))
            .with_caption("DOWNFORCE", "ACTIVE AERO SYSTEM")
            .with_description(
                "The adaptive rear wing rebalances downforce in real time, far faster than \
                 human reflex.",
            ),
        // Directly above the body; the slight Z offset keeps the look-at
        // clear of the vertical axis
        Keyframe::new(Vec3::new(-1.09, 4.5, 0.1), Vec3::new(-1.09, 0.0, 0.0))
            .with_caption("LIGHTWEIGHT", "FULL CARBON MONOCOQUE")
            .with_description(
                "An aerospace-grade carbon monocoque carries the car's dynamic personality: \
                 strength without excess mass.",
            ),
        // Aggressive low angle from the rear quarter
        Keyframe::new(Vec3::new(-4.93, 1.32, -4.46), Vec3::new(-1.09, 0.5, -0.5))
            .with_caption("VELOCITY", "400+ KM/H TOP SPEED")
            .with_description("Beyond 400 km/h, stability is engineered, not assumed."),
        // Wide orbit stops keep the spin clear of the bodywork
        Keyframe::new(Vec3::new(-5.50, 1.00, 0.00), Vec3::new(-1.09, 0.5, 0.0))
            .with_caption("G-FORCE", "2.0G LATERAL ACCELERATION")
            .with_description(
                "Wishbone geometry and electronically actuated dampers hold grip through \
                 peak lateral load.",
            ),
        Keyframe::new(Vec3::new(-4.00, 0.80, 3.00), Vec3::new(-1.09, 0.5, 0.8))
            .with_caption("AGILITY", "ELECTRONIC DIFFERENTIAL")
            .with_description(
                "The electronic differential renegotiates torque between the driven wheels \
                 every instant.",
            ),
        // Dead-center hero front
        Keyframe::new(Vec3::new(-1.09, 0.5, 3.8), Vec3::new(-1.09, 0.6, 1.0))
            .with_caption("LEGACY", "SPIRIT OF PERFORMANCE")
            .with_description(
                "Decades of relentless experimentation, standing distinctly in a class of \
                 its own.",
            ),
    ]
}
