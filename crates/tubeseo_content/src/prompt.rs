//! Prompt construction for the three content operations.

use tubeseo_core::{AspectRatio, GenerationRequest, ThumbnailRequest, ThumbnailStyle};

const SEO_BRIEF: &str = r#"Eres un estratega de crecimiento de YouTube de clase mundial y un experto en copywriting.
Tu tarea es generar un título, descripción, hashtags, palabras clave y un comentario fijado para un video de YouTube sobre el siguiente tema, con el objetivo de maximizar el alcance y la interacción.
Sigue estas directrices estrictas:

- **Título Magnético**: Crea un título irresistible que maximice los clics (CTR). Debe tener entre 60 y 70 caracteres. Utiliza elementos como números, palabras de poder (ej: Secreto, Definitivo, Increíble), preguntas que generen curiosidad o disparadores emocionales para captar la atención inmediatamente.

- **Descripción Estratégica**: Escribe una descripción de al menos 200 palabras. Debe estructurarse en tres partes claras:
  1. **Gancho (primeras 2-3 líneas)**: Resume el valor del video de forma atractiva para que aparezca en los resultados de búsqueda.
  2. **Cuerpo Detallado**: Explica más a fondo el contenido del video, incorporando las palabras clave de forma natural.
  3. **Llamadas a la Acción y Recursos**: Incluye placeholders claros para que el creador los rellene, como `[ENLACE A RECURSO O PRODUCTO]`, `[ENLACE A VIDEO RELACIONADO]`, y termina con una llamada a la acción clara para suscribirse, como `¡No te pierdas más contenido como este! Suscríbete aquí: [ENLACE DE SUSCRIPCIÓN]`.

- **Hashtags**: Genera entre 10 y 15 hashtags relevantes. Mezcla hashtags amplios con otros más específicos (de nicho).

- **Palabras clave**: Proporciona 30 palabras clave de alto valor para SEO. La mayoría de estas palabras clave deben ser extraídas directamente del título y la descripción que has generado, combinando términos de cola larga y corta para maximizar la relevancia.

- **Comentario Fijado Viral**: Crea un comentario corto y potente para fijar en la sección de comentarios. Debe:
  1. Empezar con un gancho que genere curiosidad o una afirmación audaz relacionada con el video.
  2. Aportar un valor extra o un pensamiento provocador que no esté directamente en la descripción.
  3. Terminar con una pregunta abierta o una llamada a la acción clara que invite a los espectadores a comentar (ej: '¿Cuál es tu opinión?', 'Cuéntame tu experiencia abajo', '¿Qué otro tema te gustaría ver?').
"#;

const SEO_CLOSING: &str = "Genera el contenido estrictamente en el formato JSON solicitado.";

const TITLES_BRIEF: &str = r#"Eres un experto en crecimiento de YouTube especializado en pruebas A/B de títulos de video.
Dado un tema de video y un título original, genera 2-3 alternativas de título distintas y creativas.

Para cada alternativa, proporciona también una "seoScore" de 0 a 100. La puntuación debe reflejar el potencial del título para lograr un alto ratio de clics (CTR) basándose en factores como la curiosidad, el beneficio claro, el uso de palabras clave y el impacto emocional.

Cada alternativa de título debe explorar un ángulo psicológico diferente para maximizar el CTR, por ejemplo:
- Basado en la curiosidad (ej: "El Secreto que Nadie Te Cuenta Sobre...")
- Basado en el beneficio (ej: "Consigue [Resultado Deseado] con Este Simple Truco")
- En formato de pregunta (ej: "¿Estás Cometiendo este Error al [Actividad]?")
- Directo y al grano (ej: "Guía Definitiva para [Tema]")

Mantén una longitud ideal de 60-70 caracteres para cada título.
"#;

const TITLES_CLOSING: &str = r#"Devuelve los títulos y sus puntuaciones SEO únicamente en el formato JSON solicitado, dentro de la clave "titles"."#;

const QUALITY_CLAUSE: &str = "High resolution, professional quality.";
const NO_TEXT_CLAUSE: &str = "The image should not contain any text.";

const WATERCOLOR: &str = "artistic watercolor painting style, soft blended colors, visible brush strokes, on a textured paper background, elegant and beautiful";
const RETRO: &str = "retro 80s synthwave style, neon pink and blue glowing lines, vintage computer graphics aesthetic, with film grain and a dark background";
const PIXEL_ART: &str = "8-bit pixel art style, vibrant limited color palette, clear blocky pixels, nostalgic classic video game look, no anti-aliasing";
const VIBRANT: &str = "vibrant, saturated colors, high contrast";
const MINIMALIST: &str = "clean and minimalist, simple background, one clear focal point";
const PHOTOREALISTIC: &str = "photorealistic, sharp and detailed professional photograph";
const CINEMATIC: &str = "cinematic, dramatic lighting, film-like quality";

/// Build the SEO content prompt.
///
/// A non-blank custom instruction is trimmed and appended after the topic as
/// a higher-priority block.
pub fn seo_prompt(request: &GenerationRequest) -> String {
    let mut prompt = format!("{SEO_BRIEF}\nTema del video: \"{}\"\n", request.topic());
    if let Some(instruction) = request
        .custom_instruction()
        .as_deref()
        .map(str::trim)
        .filter(|instruction| !instruction.is_empty())
    {
        prompt.push_str(&format!(
            "\n\n**Instrucción Adicional Importante del Usuario**: {instruction}\n"
        ));
    }
    prompt.push('\n');
    prompt.push_str(SEO_CLOSING);
    prompt
}

/// Build the A/B title prompt for a topic and its current title.
pub fn alternative_titles_prompt(topic: &str, original_title: &str) -> String {
    format!(
        "{TITLES_BRIEF}\nTema del video: \"{topic}\"\nTítulo Original: \"{original_title}\"\n\n{TITLES_CLOSING}"
    )
}

/// Visual description selected for a thumbnail style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDescription {
    /// Complete composition that carries its own text and framing
    Composition(String),
    /// Style phrase wrapped in the standard framing and text clauses
    Phrase(&'static str),
}

impl StyleDescription {
    /// The description text.
    pub fn text(&self) -> &str {
        match self {
            StyleDescription::Composition(text) => text,
            StyleDescription::Phrase(text) => text,
        }
    }

    /// True for compositions that must not receive framing or text clauses.
    pub fn is_composition(&self) -> bool {
        matches!(self, StyleDescription::Composition(_))
    }
}

/// Select the visual description for a style.
///
/// The viral composition burns `overlay` into the image, or the topic when
/// no overlay is given, and lays it out according to `aspect_ratio`.
/// [`ThumbnailStyle::Custom`] without a custom prompt renders as cinematic.
pub fn style_description(
    style: ThumbnailStyle,
    topic: &str,
    aspect_ratio: AspectRatio,
    overlay: Option<&str>,
) -> StyleDescription {
    match style {
        ThumbnailStyle::Viral => {
            StyleDescription::Composition(viral_composition(aspect_ratio, overlay.unwrap_or(topic)))
        }
        ThumbnailStyle::Watercolor => StyleDescription::Phrase(WATERCOLOR),
        ThumbnailStyle::Retro => StyleDescription::Phrase(RETRO),
        ThumbnailStyle::PixelArt => StyleDescription::Phrase(PIXEL_ART),
        ThumbnailStyle::Vibrant => StyleDescription::Phrase(VIBRANT),
        ThumbnailStyle::Minimalist => StyleDescription::Phrase(MINIMALIST),
        ThumbnailStyle::Photorealistic => StyleDescription::Phrase(PHOTOREALISTIC),
        ThumbnailStyle::Cinematic | ThumbnailStyle::Custom => StyleDescription::Phrase(CINEMATIC),
    }
}

fn viral_composition(aspect_ratio: AspectRatio, text: &str) -> String {
    match aspect_ratio {
        AspectRatio::Landscape => format!(
            "Fotomontaje para miniatura de YouTube, estilo viral, colores vibrantes y alto contraste. Composición dividida: a la izquierda, una persona con cara de sorpresa extrema (ojos y boca muy abiertos) señalando a la derecha. La persona tiene un borde de luz que la separa del fondo. A la derecha, el texto gigante \"{text}\" en fuente gruesa tipo Impact, con degradado amarillo-naranja, borde blanco y sombra roja. El fondo es oscuro y abstracto con neones morados y azules. Una flecha amarilla grande apunta hacia arriba. Fotorrealista y muy llamativo."
        ),
        AspectRatio::Portrait => format!(
            "Fotomontaje para miniatura de YouTube Short (formato 9:16), estilo viral, colores vibrantes, alto contraste. Composición vertical: arriba, el texto gigante \"{text}\" en fuente gruesa tipo Impact, con degradado amarillo-naranja, borde blanco y sombra roja. Abajo, una persona con cara de sorpresa extrema mirando hacia el texto, con un borde de luz que la separa del fondo. El fondo es oscuro y abstracto con neones morados y azules. Fotorrealista y muy llamativo."
        ),
    }
}

fn overlay_clause(overlay: &str) -> String {
    format!(
        "CRITICAL INSTRUCTION: The image must prominently feature the text \"{overlay}\". The text must be perfectly centered, highly legible with strong contrast against the background, and rendered in a professional, appealing font. The entire text must be fully visible and MUST NOT be cropped or cut off by the image edges."
    )
}

/// Build the image prompt for a thumbnail request.
///
/// A non-blank custom prompt is returned verbatim and bypasses every style.
/// Otherwise the prompt joins, with single spaces, an optional framing
/// sentence, the style description, a quality clause and an optional text
/// clause.
pub fn thumbnail_prompt(request: &ThumbnailRequest) -> String {
    if let Some(custom) = request.custom_prompt_override() {
        return custom.to_string();
    }

    let overlay = request.overlay();
    let description = style_description(
        *request.style(),
        request.topic(),
        *request.aspect_ratio(),
        overlay,
    );

    if description.is_composition() {
        return [description.text(), QUALITY_CLAUSE].join(" ");
    }

    let framing = format!("YouTube thumbnail for a video titled \"{}\".", request.topic());
    let text_clause = match overlay {
        Some(text) => overlay_clause(text),
        None => NO_TEXT_CLAUSE.to_string(),
    };
    [
        framing.as_str(),
        description.text(),
        QUALITY_CLAUSE,
        text_clause.as_str(),
    ]
    .join(" ")
}
