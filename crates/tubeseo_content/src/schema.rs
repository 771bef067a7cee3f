//! Response schemas sent with the text-model prompts.

use serde_json::{Value, json};

/// Schema of the SEO content record. Every field is required.
pub fn seo_content_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "Un título de video de YouTube magnético y que incite al clic, utilizando números, palabras de poder o preguntas. Longitud ideal: 60-70 caracteres."
            },
            "description": {
                "type": "STRING",
                "description": "Una descripción estratégica de más de 200 palabras, estructurada con un gancho inicial fuerte, un cuerpo detallado y placeholders explícitos como [ENLACE A RECURSO] y [ENLACE DE SUSCRIPCIÓN]."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Una lista de 10 a 15 hashtags relevantes para YouTube, comenzando con #."
            },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Una lista de 30 palabras clave SEO importantes para el video, extraídas principalmente del título y la descripción."
            },
            "pinnedComment": {
                "type": "STRING",
                "description": "Un comentario para fijar en YouTube. Debe ser viral, con un gancho fuerte, relacionado con el título y la descripción, y terminar con una pregunta o llamada a la acción para fomentar la interacción de los espectadores."
            }
        },
        "required": ["title", "description", "hashtags", "keywords", "pinnedComment"]
    })
}

/// Schema of the `{ "titles": [...] }` wrapper returned for A/B titles.
pub fn alternative_titles_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "titles": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "Un título de video de YouTube alternativo para pruebas A/B."
                        },
                        "seoScore": {
                            "type": "INTEGER",
                            "description": "Una puntuación SEO del 0 al 100 para el título, evaluando el potencial de CTR y la relevancia."
                        }
                    },
                    "required": ["title", "seoScore"]
                },
                "description": "Un array de 2-3 títulos de video alternativos, cada uno con una puntuación SEO."
            }
        },
        "required": ["titles"]
    })
}
